use arrowpress_core::{
    BoardTopology, Coordinate, CoordinateMapper, CouplingVector, Layout, PressVector,
};

use crate::{Mode, SolveError, modular};

/// Returns the cells advanced together with `index` when it is pressed, in
/// ascending order (excluding `index` itself).
///
/// On square boards these are the orthogonal neighbours. On the hexagonal
/// board they are the up to six adjacent hexagons: the cells above and below
/// in the same column, and the two touching cells in each adjacent column.
///
/// # Examples
///
/// ```
/// use arrowpress_core::BoardTopology;
/// use arrowpress_solver::neighbors;
///
/// // Centre of the 3×3 board.
/// assert_eq!(neighbors(BoardTopology::EASY, 4), [1, 3, 5, 7]);
///
/// // Top of the first hex column touches the first two cells of the second.
/// assert_eq!(neighbors(BoardTopology::HARD, 0), [1, 4, 5]);
/// ```
#[must_use]
pub fn neighbors(topology: BoardTopology, index: usize) -> Vec<usize> {
    let mapper = CoordinateMapper::new(topology.layout());
    let Some(center) = mapper.coordinate(index) else {
        return Vec::new();
    };
    mapper
        .coordinates()
        .enumerate()
        .filter(|&(other, coord)| other != index && adjacent(topology.layout(), center, coord))
        .map(|(other, _)| other)
        .collect()
}

fn adjacent(layout: Layout, a: Coordinate, b: Coordinate) -> bool {
    match (layout, a, b) {
        (
            Layout::Square { .. },
            Coordinate::Square { row: r1, col: c1 },
            Coordinate::Square { row: r2, col: c2 },
        ) => r1.abs_diff(r2) + c1.abs_diff(c2) == 1,
        (
            Layout::Hex(profile),
            Coordinate::Hex {
                column: c1,
                row_in_column: r1,
            },
            Coordinate::Hex {
                column: c2,
                row_in_column: r2,
            },
        ) => {
            // Vertical centre of a cell in half rows. Adjacent columns touch
            // where centres are half a row apart.
            let half_row = |column: usize, row: usize| {
                2 * row + profile.max_len() - profile.column_lengths()[column]
            };
            let dy = half_row(c1, r1).abs_diff(half_row(c2, r2));
            match c1.abs_diff(c2) {
                0 => dy == 2,
                1 => dy == 1,
                _ => false,
            }
        }
        _ => false,
    }
}

/// The toggle-coupling relation of a board as a matrix over `Z/nZ`.
///
/// Entry `(i, j)` is 1 if pressing cell `j` advances cell `i`, and 0
/// otherwise. Every press advances the pressed cell itself, and adjacency is
/// symmetric, so the matrix is symmetric with a unit diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouplingMatrix {
    topology: BoardTopology,
    rows: Vec<Vec<u32>>,
}

impl CouplingMatrix {
    /// Builds the coupling matrix of `topology`.
    #[must_use]
    pub fn new(topology: BoardTopology) -> Self {
        let n = topology.cell_count();
        let mut rows = vec![vec![0; n]; n];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1;
            for j in neighbors(topology, i) {
                row[j] = 1;
            }
        }
        Self { topology, rows }
    }

    /// Returns the topology the matrix was built for.
    #[must_use]
    pub fn topology(&self) -> BoardTopology {
        self.topology
    }

    /// Returns the matrix rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Returns `true` if pressing `pressed` advances `cell`.
    #[must_use]
    pub fn affects(&self, pressed: usize, cell: usize) -> bool {
        self.rows
            .get(cell)
            .and_then(|row| row.get(pressed))
            .is_some_and(|&v| v != 0)
    }

    /// Returns the board reached from `state` after pressing each cell the
    /// given number of times.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::TopologyMismatch`] if either vector belongs to a
    /// different topology.
    pub fn apply(
        &self,
        state: &CouplingVector,
        presses: &PressVector,
    ) -> Result<CouplingVector, SolveError> {
        self.check_topology(state.topology())?;
        self.check_topology(presses.topology())?;

        let modulus = u32::from(self.topology.modulus());
        let x: Vec<u32> = presses.values().iter().map(|&v| u32::from(v)).collect();
        let advance = modular::mul_vec(&self.rows, &x, modulus);
        let values = state
            .values()
            .iter()
            .zip(advance)
            .map(|(&s, a)| residue(u32::from(s) + a, modulus))
            .collect();
        Ok(CouplingVector::new(self.topology, values)?)
    }

    pub(crate) fn check_topology(&self, found: BoardTopology) -> Result<(), SolveError> {
        if found == self.topology {
            Ok(())
        } else {
            Err(SolveError::TopologyMismatch {
                expected: self.topology,
                found,
            })
        }
    }
}

/// Applies `presses` to `state` using the coupling relation of their topology.
///
/// The matrix is the one cached by the topology's [`Mode`].
///
/// # Errors
///
/// Returns [`SolveError::TopologyMismatch`] if the vectors belong to
/// different topologies.
pub fn apply_presses(
    state: &CouplingVector,
    presses: &PressVector,
) -> Result<CouplingVector, SolveError> {
    let topology = state.topology();
    match Mode::for_topology(topology) {
        Some(mode) => mode.solver().matrix().apply(state, presses),
        None => CouplingMatrix::new(topology).apply(state, presses),
    }
}

/// Reduces `value` modulo `modulus` (at most 9) into a `u8`.
#[expect(clippy::cast_possible_truncation)]
pub(crate) fn residue(value: u32, modulus: u32) -> u8 {
    debug_assert!(modulus <= u32::from(u8::MAX));
    (value % modulus) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_neighbors() {
        assert_eq!(neighbors(BoardTopology::EASY, 0), [1, 3]);
        assert_eq!(neighbors(BoardTopology::EASY, 8), [5, 7]);
        assert_eq!(neighbors(BoardTopology::MEDIUM, 5), [1, 4, 6, 9]);
        assert_eq!(neighbors(BoardTopology::MEDIUM, 3), [2, 7]);
        assert!(neighbors(BoardTopology::EASY, 9).is_empty());
    }

    #[test]
    fn test_hex_neighbors() {
        // Centre of the board: column 3, row 3 has all six neighbours.
        assert_eq!(neighbors(BoardTopology::HARD, 18), [11, 12, 17, 19, 24, 25]);
        // Top of the tallest column.
        assert_eq!(neighbors(BoardTopology::HARD, 15), [9, 16, 22]);
        // Bottom of the last column.
        assert_eq!(neighbors(BoardTopology::EXPERT, 36), [31, 32, 35]);
    }

    #[test]
    fn test_degree_sums() {
        let degree_sum =
            |t: BoardTopology| (0..t.cell_count()).map(|i| neighbors(t, i).len()).sum::<usize>();
        assert_eq!(degree_sum(BoardTopology::EASY), 24);
        assert_eq!(degree_sum(BoardTopology::MEDIUM), 48);
        // A side-4 hexagon of hexagons has 90 shared edges.
        assert_eq!(degree_sum(BoardTopology::HARD), 180);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        for topology in BoardTopology::ALL {
            let matrix = CouplingMatrix::new(topology);
            let n = topology.cell_count();
            for i in 0..n {
                assert!(matrix.affects(i, i));
                for j in 0..n {
                    assert_eq!(matrix.affects(i, j), matrix.affects(j, i));
                }
            }
        }
    }

    #[test]
    fn test_apply_single_press() {
        let topology = BoardTopology::EASY;
        let state = CouplingVector::zero(topology);
        let mut presses = vec![0; 9];
        presses[4] = 1;
        let presses = PressVector::new(topology, presses).unwrap();
        let after = apply_presses(&state, &presses).unwrap();
        assert_eq!(after.values(), &[0, 1, 0, 1, 1, 1, 0, 1, 0]);

        // Four presses of the same cell wrap around.
        let presses = PressVector::new(topology, vec![0, 0, 0, 0, 3, 0, 0, 0, 0]).unwrap();
        let after = apply_presses(&after, &presses).unwrap();
        assert!(after.is_zero());
    }

    #[test]
    fn test_apply_presses_uses_mode_matrix() {
        for mode in Mode::ALL {
            let topology = mode.topology();
            let presses: Vec<u8> = (0..topology.cell_count())
                .map(|i| residue(u32::try_from(i).unwrap(), u32::from(topology.modulus())))
                .collect();
            let presses = PressVector::new(topology, presses).unwrap();
            let state = CouplingVector::zero(topology);
            assert_eq!(
                apply_presses(&state, &presses).unwrap(),
                CouplingMatrix::new(topology).apply(&state, &presses).unwrap()
            );
        }
    }

    #[test]
    fn test_residue() {
        assert_eq!(residue(0, 4), 0);
        assert_eq!(residue(7, 4), 3);
        assert_eq!(residue(41, 6), 5);
        assert_eq!(residue(u32::MAX, 9), 3);
    }

    #[test]
    fn test_apply_rejects_other_topology() {
        let state = CouplingVector::zero(BoardTopology::HARD);
        let presses = PressVector::zero(BoardTopology::EXPERT);
        assert_eq!(
            apply_presses(&state, &presses),
            Err(SolveError::TopologyMismatch {
                expected: BoardTopology::HARD,
                found: BoardTopology::EXPERT,
            })
        );
    }
}
