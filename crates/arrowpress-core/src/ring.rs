//! Vectors over the ring `Z/nZ`, one entry per cell.
//!
//! [`InputVector`] holds the observed 1-based orientations exactly as the
//! player entered them. Shifting every entry by −1 gives a [`CouplingVector`],
//! the 0-based form the solver works on. The solver answers with a
//! [`PressVector`].
//!
//! Both ring vectors are the same container, [`RingVector`], tagged with a
//! marker type so that a board state cannot be passed where press counts are
//! expected.

use std::marker::PhantomData;

use crate::{InputError, parse::parse_values, topology::BoardTopology};

/// Errors from constructing a [`RingVector`] out of raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum VectorError {
    /// The number of entries differs from the number of cells.
    #[display("expected {expected} entries, but found {found}")]
    LengthMismatch {
        /// Number of cells of the topology.
        expected: usize,
        /// Number of entries supplied.
        found: usize,
    },
    /// An entry is not a residue of the ring.
    #[display("entry {index} is {value}, which is not below the modulus {modulus}")]
    OutOfRing {
        /// Position of the entry.
        index: usize,
        /// The offending value.
        value: u8,
        /// Modulus of the topology.
        modulus: u8,
    },
}

/// Marker for board states shifted into `Z/nZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupling {}

/// Marker for per-cell press counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presses {}

/// The 0-based board state the solver consumes.
pub type CouplingVector = RingVector<Coupling>;

/// Per-cell press counts, each reduced modulo `n`.
pub type PressVector = RingVector<Presses>;

/// A vector of residues modulo the topology's modulus, one per cell.
///
/// Entries are stored in the topology's flattened order and are always in
/// `0..modulus`.
#[derive(Debug)]
pub struct RingVector<K> {
    topology: BoardTopology,
    values: Vec<u8>,
    _kind: PhantomData<K>,
}

impl<K> Clone for RingVector<K> {
    fn clone(&self) -> Self {
        Self {
            topology: self.topology,
            values: self.values.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K> PartialEq for RingVector<K> {
    fn eq(&self, other: &Self) -> bool {
        self.topology == other.topology && self.values == other.values
    }
}

impl<K> Eq for RingVector<K> {}

impl<K> RingVector<K> {
    /// Creates a vector from residues.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::LengthMismatch`] if `values` does not have one
    /// entry per cell, and [`VectorError::OutOfRing`] if an entry is not below
    /// the modulus.
    pub fn new(topology: BoardTopology, values: Vec<u8>) -> Result<Self, VectorError> {
        if values.len() != topology.cell_count() {
            return Err(VectorError::LengthMismatch {
                expected: topology.cell_count(),
                found: values.len(),
            });
        }
        let modulus = topology.modulus();
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v >= modulus) {
            return Err(VectorError::OutOfRing {
                index,
                value,
                modulus,
            });
        }
        Ok(Self::new_unchecked(topology, values))
    }

    /// Creates the all-zero vector.
    #[must_use]
    pub fn zero(topology: BoardTopology) -> Self {
        Self::new_unchecked(topology, vec![0; topology.cell_count()])
    }

    fn new_unchecked(topology: BoardTopology, values: Vec<u8>) -> Self {
        debug_assert_eq!(values.len(), topology.cell_count());
        Self {
            topology,
            values,
            _kind: PhantomData,
        }
    }

    /// Returns the topology the vector is laid out on.
    #[must_use]
    pub fn topology(&self) -> BoardTopology {
        self.topology
    }

    /// Returns the modulus of the ring.
    #[must_use]
    pub fn modulus(&self) -> u8 {
        self.topology.modulus()
    }

    /// Returns the residues in flattened order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Returns `true` if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }
}

impl CouplingVector {
    /// Shifts every entry back by +1, giving the 1-based orientations.
    ///
    /// ```
    /// use arrowpress_core::{BoardTopology, InputVector};
    ///
    /// let input = InputVector::parse(BoardTopology::EASY, "412341234")?;
    /// assert_eq!(input.to_coupling().to_orientations(), input.values());
    /// # Ok::<(), arrowpress_core::InputError>(())
    /// ```
    #[must_use]
    pub fn to_orientations(&self) -> Vec<u8> {
        self.values.iter().map(|v| v + 1).collect()
    }
}

/// Observed orientations of every cell, each in `1..=modulus`.
///
/// Square boards are read row by row, hexagonal boards column by column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputVector {
    topology: BoardTopology,
    values: Vec<u8>,
}

impl InputVector {
    /// Parses and validates one line of board input.
    ///
    /// # Errors
    ///
    /// Returns the [`InputError`] produced by [`parse_values`] with the
    /// topology's cell count and `1..=modulus` as bounds.
    pub fn parse(topology: BoardTopology, text: &str) -> Result<Self, InputError> {
        let values = parse_values(text, topology.cell_count(), 1, topology.modulus())?;
        Ok(Self { topology, values })
    }

    /// Validates already separated orientations.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::WrongCount`] or [`InputError::OutOfRange`].
    pub fn from_values(topology: BoardTopology, values: Vec<u8>) -> Result<Self, InputError> {
        if values.len() != topology.cell_count() {
            return Err(InputError::WrongCount {
                expected: topology.cell_count(),
                found: values.len(),
            });
        }
        let max = topology.modulus();
        if let Some(&value) = values.iter().find(|v| !(1..=max).contains(*v)) {
            return Err(InputError::OutOfRange {
                value: i64::from(value),
                min: 1,
                max,
            });
        }
        Ok(Self { topology, values })
    }

    /// Returns the topology the input was validated against.
    #[must_use]
    pub fn topology(&self) -> BoardTopology {
        self.topology
    }

    /// Returns the 1-based orientations in flattened order.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Shifts every orientation by −1 into `Z/nZ`.
    #[must_use]
    pub fn to_coupling(&self) -> CouplingVector {
        CouplingVector::new_unchecked(self.topology, self.values.iter().map(|v| v - 1).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_roundtrip() {
        for topology in BoardTopology::ALL {
            let values: Vec<u8> = (0..topology.cell_count())
                .map(|i| u8::try_from(i % usize::from(topology.modulus())).unwrap() + 1)
                .collect();
            let input = InputVector::from_values(topology, values.clone()).unwrap();
            let coupling = input.to_coupling();
            assert!(coupling.values().iter().all(|&v| v < topology.modulus()));
            assert_eq!(coupling.to_orientations(), values);
        }
    }

    #[test]
    fn test_all_ones_is_zero() {
        let input = InputVector::parse(BoardTopology::EASY, "111111111").unwrap();
        assert!(input.to_coupling().is_zero());
        assert_eq!(input.to_coupling(), CouplingVector::zero(BoardTopology::EASY));
    }

    #[test]
    fn test_from_values_rejects() {
        assert_eq!(
            InputVector::from_values(BoardTopology::EASY, vec![1; 8]),
            Err(InputError::WrongCount {
                expected: 9,
                found: 8
            })
        );
        let mut values = vec![1; 37];
        values[3] = 3;
        assert_eq!(
            InputVector::from_values(BoardTopology::HARD, values),
            Err(InputError::OutOfRange {
                value: 3,
                min: 1,
                max: 2
            })
        );
    }

    #[test]
    fn test_ring_vector_rejects() {
        assert_eq!(
            PressVector::new(BoardTopology::EASY, vec![0; 10]),
            Err(VectorError::LengthMismatch {
                expected: 9,
                found: 10
            })
        );
        let mut values = vec![0; 9];
        values[7] = 4;
        assert_eq!(
            PressVector::new(BoardTopology::EASY, values),
            Err(VectorError::OutOfRing {
                index: 7,
                value: 4,
                modulus: 4
            })
        );
        assert!(PressVector::new(BoardTopology::EASY, vec![3; 9]).is_ok());
    }
}
