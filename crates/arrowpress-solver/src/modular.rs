//! Linear systems over the ring `Z/nZ`.
//!
//! `Z/nZ` is only a field for prime `n`, so plain Gauss-Jordan elimination
//! with modular inverses breaks down for the moduli 4 and 6 used by the
//! square and expert boards. Instead the modulus is split into prime powers:
//!
//! - in `Z/p^k` every nonzero element is `p^v · u` with `u` a unit, so by always
//!   pivoting on the entry of smallest valuation `v` (full pivoting), the pivot
//!   divides every entry still to be eliminated, and elimination stays exact;
//! - the partial solutions modulo each prime power are recombined with the
//!   Chinese remainder theorem.
//!
//! Free variables are fixed to zero, so singular systems yield one
//! deterministic solution. Solving never fails: rows that cannot be
//! satisfied are skipped, the pivot variables they determine are left at
//! zero, and the result is marked as not consistent.
//!
//! # Examples
//!
//! ```
//! use arrowpress_solver::modular::solve_mod;
//!
//! // 2x + y = 3, 2y = 2 (mod 4): a naive solver cannot invert the pivot 2.
//! let matrix = [vec![2, 1], vec![0, 2]];
//! let solution = solve_mod(&matrix, &[3, 2], 4);
//! let x = &solution.values;
//! assert!(solution.consistent);
//! assert_eq!((2 * x[0] + x[1]) % 4, 3);
//! assert_eq!((2 * x[1]) % 4, 2);
//!
//! // 2x = 1 (mod 4) has no solution.
//! let solution = solve_mod(&[vec![2]], &[1], 4);
//! assert!(!solution.consistent);
//! assert_eq!(solution.values, [0]);
//! ```

use log::{debug, trace};

/// A prime power `p^k` dividing the modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimePower {
    /// The prime `p`.
    pub prime: u32,
    /// The exponent `k` (at least 1).
    pub exponent: u32,
}

impl PrimePower {
    /// Returns `p^k`.
    #[must_use]
    pub fn modulus(self) -> u32 {
        self.prime.pow(self.exponent)
    }

    /// Returns the largest `v` such that `p^v` divides `value`.
    ///
    /// Zero has valuation `k`, the largest meaningful one in `Z/p^k`.
    #[must_use]
    pub fn valuation(self, value: u32) -> u32 {
        let mut value = value % self.modulus();
        if value == 0 {
            return self.exponent;
        }
        let mut v = 0;
        while value % self.prime == 0 {
            value /= self.prime;
            v += 1;
        }
        v
    }
}

/// Outcome of [`solve_mod`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModSolution {
    /// One entry per column, each in `0..modulus`.
    pub values: Vec<u32>,
    /// `true` if `values` satisfies every equation.
    pub consistent: bool,
}

/// Splits `n` into its prime-power factors, smallest prime first.
///
/// ```
/// use arrowpress_solver::modular::{PrimePower, factorize};
///
/// assert_eq!(
///     factorize(12),
///     [
///         PrimePower { prime: 2, exponent: 2 },
///         PrimePower { prime: 3, exponent: 1 },
///     ]
/// );
/// ```
#[must_use]
pub fn factorize(mut n: u32) -> Vec<PrimePower> {
    let mut factors = Vec::new();
    let mut prime = 2;
    while n > 1 {
        if prime * prime > n {
            factors.push(PrimePower {
                prime: n,
                exponent: 1,
            });
            break;
        }
        let mut exponent = 0;
        while n % prime == 0 {
            n /= prime;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push(PrimePower { prime, exponent });
        }
        prime += 1;
    }
    factors
}

/// Solves `matrix · x ≡ rhs (mod modulus)`.
///
/// `matrix` is a list of rows of equal length; `rhs` has one entry per row.
/// Always returns an assignment with every entry in `0..modulus`. For an
/// inconsistent system it satisfies the equations that elimination could
/// satisfy, and [`ModSolution::consistent`] is `false`.
///
/// # Panics
///
/// Panics if `modulus` is smaller than 2 or `rhs` does not match the number
/// of rows.
#[must_use]
pub fn solve_mod(matrix: &[Vec<u32>], rhs: &[u32], modulus: u32) -> ModSolution {
    assert!(modulus >= 2, "modulus must be at least 2, got {modulus}");
    assert_eq!(matrix.len(), rhs.len());

    let factors = factorize(modulus);
    debug!(
        "solving {}x{} system mod {modulus} via {factors:?}",
        matrix.len(),
        column_count(matrix)
    );

    let partials: Vec<_> = factors
        .iter()
        .map(|&factor| (solve_prime_power(matrix, rhs, factor), factor.modulus()))
        .collect();
    let consistent = partials.iter().all(|(partial, _)| partial.consistent);

    let values = (0..column_count(matrix))
        .map(|col| {
            let residues: Vec<_> = partials
                .iter()
                .map(|(partial, m)| (partial.values[col], *m))
                .collect();
            crt(&residues)
        })
        .collect();
    ModSolution { values, consistent }
}

/// Returns `matrix · x (mod modulus)`.
#[must_use]
pub fn mul_vec(matrix: &[Vec<u32>], x: &[u32], modulus: u32) -> Vec<u32> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(x)
                .fold(0, |acc, (&a, &v)| add(acc, mul(a, v, modulus), modulus))
        })
        .collect()
}

fn column_count(matrix: &[Vec<u32>]) -> usize {
    matrix.first().map_or(0, Vec::len)
}

fn solve_prime_power(matrix: &[Vec<u32>], rhs: &[u32], factor: PrimePower) -> ModSolution {
    let q = factor.modulus();
    let rows = matrix.len();
    let cols = column_count(matrix);

    let mut a: Vec<Vec<u32>> = matrix
        .iter()
        .map(|row| row.iter().map(|v| v % q).collect())
        .collect();
    let mut b: Vec<u32> = rhs.iter().map(|v| v % q).collect();
    // order[step] is the original column eliminated at `step`.
    let mut order: Vec<usize> = (0..cols).collect();
    let mut pivots = Vec::new();

    let mut rank = 0;
    while rank < rows.min(cols) {
        let mut best: Option<(u32, usize, usize)> = None;
        for (i, row) in a.iter().enumerate().skip(rank) {
            for (k, &col) in order.iter().enumerate().skip(rank) {
                if row[col] == 0 {
                    continue;
                }
                let v = factor.valuation(row[col]);
                if best.is_none_or(|(best_v, _, _)| v < best_v) {
                    best = Some((v, i, k));
                }
            }
        }
        let Some((v, i, k)) = best else {
            break;
        };

        a.swap(rank, i);
        b.swap(rank, i);
        order.swap(rank, k);
        let col = order[rank];

        // Normalize the pivot to exactly p^v.
        let pivot = factor.prime.pow(v);
        let unit_inv = coprime_inverse(a[rank][col] / pivot, q);
        for value in &mut a[rank] {
            *value = mul(*value, unit_inv, q);
        }
        b[rank] = mul(b[rank], unit_inv, q);
        trace!("mod {q}: step {rank} pivots on row {i}, column {col} (valuation {v})");

        let (upper, lower) = a.split_at_mut(rank + 1);
        let pivot_row = &upper[rank];
        for (offset, row) in lower.iter_mut().enumerate() {
            if row[col] == 0 {
                continue;
            }
            // Exact: the pivot has the smallest valuation left in the submatrix.
            let multiple = row[col] / pivot;
            for (value, &p) in row.iter_mut().zip(pivot_row) {
                *value = sub(*value, mul(multiple, p, q), q);
            }
            let r = rank + 1 + offset;
            b[r] = sub(b[r], mul(multiple, b[rank], q), q);
        }

        pivots.push(pivot);
        rank += 1;
    }

    let mut consistent = b[rank..].iter().all(|&v| v == 0);
    if !consistent {
        trace!("mod {q}: rows past rank {rank} cannot be satisfied");
    }

    let mut x = vec![0; cols];
    for step in (0..rank).rev() {
        let col = order[step];
        let acc = order[step + 1..]
            .iter()
            .fold(b[step], |acc, &c| sub(acc, mul(a[step][c], x[c], q), q));
        if acc % pivots[step] == 0 {
            x[col] = acc / pivots[step];
        } else {
            trace!("mod {q}: pivot {} does not divide {acc}, skipping row", pivots[step]);
            consistent = false;
        }
    }
    ModSolution {
        values: x,
        consistent,
    }
}

/// Combines `x ≡ r_i (mod m_i)` for pairwise coprime `m_i`.
fn crt(residues: &[(u32, u32)]) -> u32 {
    let mut value = 0;
    let mut modulus = 1;
    for &(r, m) in residues {
        let t = mul(sub(r % m, value % m, m), coprime_inverse(modulus % m, m), m);
        value += modulus * t;
        modulus *= m;
    }
    value
}

/// Returns `(gcd(a, m), s)` with `a·s ≡ gcd(a, m) (mod m)` and `s` in `0..m`.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bezout(a: u32, m: u32) -> (u32, u32) {
    let (mut old_r, mut r) = (i64::from(a % m), i64::from(m));
    let (mut old_s, mut s) = (1_i64, 0_i64);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }
    (old_r as u32, old_s.rem_euclid(i64::from(m)) as u32)
}

/// Returns the inverse of `a`, which must be a unit modulo `m`.
fn coprime_inverse(a: u32, m: u32) -> u32 {
    if m == 1 {
        return 0;
    }
    let (gcd, s) = bezout(a, m);
    debug_assert_eq!(gcd, 1, "{a} is not a unit mod {m}");
    s
}

fn add(a: u32, b: u32, m: u32) -> u32 {
    (a + b) % m
}

fn sub(a: u32, b: u32, m: u32) -> u32 {
    (a + m - b % m) % m
}

#[expect(clippy::cast_possible_truncation)]
fn mul(a: u32, b: u32, m: u32) -> u32 {
    ((u64::from(a) * u64::from(b)) % u64::from(m)) as u32
}
