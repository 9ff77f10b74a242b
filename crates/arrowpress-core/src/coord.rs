//! Mapping between flattened vector positions and board coordinates.
//!
//! Input and press vectors are flat sequences. Square boards flatten
//! row-major, hexagonal boards column-major. [`CoordinateMapper`] converts in
//! both directions and additionally places hexagonal cells on a rectangular
//! display grid, leaving the corners of that grid empty.
//!
//! # Examples
//!
//! ```
//! use arrowpress_core::{BoardTopology, Coordinate, CoordinateMapper};
//!
//! let mapper = CoordinateMapper::new(BoardTopology::HARD.layout());
//!
//! // Index 4 is the first cell of the second column.
//! let coord = mapper.coordinate(4).unwrap();
//! assert_eq!(coord, Coordinate::Hex { column: 1, row_in_column: 0 });
//! assert_eq!(mapper.index(coord), Some(4));
//!
//! // The second column is shifted down by one display row.
//! assert_eq!(mapper.cell_at_display(0, 1), None);
//! assert_eq!(mapper.cell_at_display(1, 1), Some(4));
//! ```

use std::fmt::{self, Display};

use crate::topology::Layout;

/// A cell position on the board (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Coordinate {
    /// A cell of a square board.
    Square {
        /// Row, top to bottom.
        row: usize,
        /// Column, left to right.
        col: usize,
    },
    /// A cell of a hexagonal board.
    Hex {
        /// Column, left to right.
        column: usize,
        /// Position within the column, top to bottom.
        row_in_column: usize,
    },
}

/// Displays the coordinate 1-based, as `(row,col)` or `(column,row)`.
impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Coordinate::Square { row, col } => write!(f, "({},{})", row + 1, col + 1),
            Coordinate::Hex {
                column,
                row_in_column,
            } => write!(f, "({},{})", column + 1, row_in_column + 1),
        }
    }
}

/// A position on the rectangular display grid (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayPosition {
    /// Display row, top to bottom.
    pub row: usize,
    /// Display column, left to right.
    pub col: usize,
}

/// Bijection between flattened indices and coordinates of one board layout.
///
/// The mapper is stateless; all hexagonal tables come from the `const`
/// [`HexProfile`](crate::HexProfile) it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    layout: Layout,
}

impl CoordinateMapper {
    /// Creates a mapper for the given layout.
    #[must_use]
    pub const fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Returns the layout this mapper works on.
    #[must_use]
    pub const fn layout(self) -> Layout {
        self.layout
    }

    /// Returns the number of cells, i.e. the size of the index space.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.layout.cell_count()
    }

    /// Returns the coordinate of the cell at flattened position `index`.
    ///
    /// Returns `None` if `index` is not smaller than [`cell_count`](Self::cell_count).
    #[must_use]
    pub fn coordinate(self, index: usize) -> Option<Coordinate> {
        if index >= self.cell_count() {
            return None;
        }
        match self.layout {
            Layout::Square { size } => Some(Coordinate::Square {
                row: index / size,
                col: index % size,
            }),
            Layout::Hex(profile) => {
                let column = profile
                    .starts()
                    .iter()
                    .zip(profile.column_lengths())
                    .position(|(start, len)| index < start + len)?;
                Some(Coordinate::Hex {
                    column,
                    row_in_column: index - profile.starts()[column],
                })
            }
        }
    }

    /// Returns the flattened position of `coord`.
    ///
    /// Returns `None` if the coordinate lies outside the board or belongs to
    /// the other kind of layout.
    #[must_use]
    pub fn index(self, coord: Coordinate) -> Option<usize> {
        match (self.layout, coord) {
            (Layout::Square { size }, Coordinate::Square { row, col }) => {
                (row < size && col < size).then_some(row * size + col)
            }
            (
                Layout::Hex(profile),
                Coordinate::Hex {
                    column,
                    row_in_column,
                },
            ) => {
                let len = *profile.column_lengths().get(column)?;
                (row_in_column < len).then(|| profile.starts()[column] + row_in_column)
            }
            _ => None,
        }
    }

    /// Returns the number of rows of the display grid.
    #[must_use]
    pub const fn display_rows(self) -> usize {
        match self.layout {
            Layout::Square { size } => size,
            Layout::Hex(profile) => profile.max_len(),
        }
    }

    /// Returns the number of columns of the display grid.
    #[must_use]
    pub const fn display_columns(self) -> usize {
        match self.layout {
            Layout::Square { size } => size,
            Layout::Hex(profile) => profile.column_count(),
        }
    }

    /// Returns where the cell at `index` is drawn.
    ///
    /// For hexagonal boards the row is shifted by the column's vertical offset.
    #[must_use]
    pub fn display_position(self, index: usize) -> Option<DisplayPosition> {
        match (self.layout, self.coordinate(index)?) {
            (Layout::Square { .. }, Coordinate::Square { row, col }) => {
                Some(DisplayPosition { row, col })
            }
            (
                Layout::Hex(profile),
                Coordinate::Hex {
                    column,
                    row_in_column,
                },
            ) => Some(DisplayPosition {
                row: profile.offsets()[column] + row_in_column,
                col: column,
            }),
            _ => None,
        }
    }

    /// Returns the flattened index of the cell drawn at the display position,
    /// or `None` if that position is blank.
    #[must_use]
    pub fn cell_at_display(self, row: usize, col: usize) -> Option<usize> {
        match self.layout {
            Layout::Square { size } => (row < size && col < size).then_some(row * size + col),
            Layout::Hex(profile) => {
                let offset = *profile.offsets().get(col)?;
                let len = profile.column_lengths()[col];
                (offset..offset + len)
                    .contains(&row)
                    .then(|| profile.starts()[col] + (row - offset))
            }
        }
    }

    /// Returns all coordinates in flattened order.
    pub fn coordinates(self) -> impl Iterator<Item = Coordinate> {
        (0..self.cell_count()).filter_map(move |index| self.coordinate(index))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::BoardTopology;

    fn mappers() -> impl Iterator<Item = CoordinateMapper> {
        BoardTopology::ALL
            .into_iter()
            .map(|topology| CoordinateMapper::new(topology.layout()))
    }

    #[test]
    fn test_square_is_row_major() {
        let mapper = CoordinateMapper::new(BoardTopology::MEDIUM.layout());
        assert_eq!(
            mapper.coordinate(6),
            Some(Coordinate::Square { row: 1, col: 2 })
        );
        assert_eq!(mapper.coordinate(16), None);
        assert_eq!(mapper.index(Coordinate::Square { row: 3, col: 3 }), Some(15));
        assert_eq!(mapper.index(Coordinate::Square { row: 4, col: 0 }), None);
        assert_eq!(mapper.coordinate(6).unwrap().to_string(), "(2,3)");
    }

    #[test]
    fn test_hex_is_column_major() {
        let mapper = CoordinateMapper::new(BoardTopology::EXPERT.layout());
        let columns: Vec<_> = mapper
            .coordinates()
            .map(|coord| match coord {
                Coordinate::Hex { column, .. } => column,
                Coordinate::Square { .. } => unreachable!(),
            })
            .collect();
        let mut expected = Vec::new();
        for (column, len) in [4, 5, 6, 7, 6, 5, 4].into_iter().enumerate() {
            expected.extend(std::iter::repeat_n(column, len));
        }
        assert_eq!(columns, expected);
        assert_eq!(
            mapper.coordinate(36),
            Some(Coordinate::Hex {
                column: 6,
                row_in_column: 3
            })
        );
        assert_eq!(
            mapper.index(Coordinate::Hex {
                column: 0,
                row_in_column: 4
            }),
            None
        );
        assert_eq!(
            mapper.index(Coordinate::Square { row: 0, col: 0 }),
            None
        );
    }

    #[test]
    fn test_bijection_all_modes() {
        for mapper in mappers() {
            for index in 0..mapper.cell_count() {
                let coord = mapper.coordinate(index).unwrap();
                assert_eq!(mapper.index(coord), Some(index));

                let pos = mapper.display_position(index).unwrap();
                assert_eq!(mapper.cell_at_display(pos.row, pos.col), Some(index));
            }
        }
    }

    #[test]
    fn test_hex_display_presence() {
        let mapper = CoordinateMapper::new(BoardTopology::HARD.layout());
        assert_eq!(mapper.display_rows(), 7);
        assert_eq!(mapper.display_columns(), 7);

        let mut present = 0;
        for row in 0..7 {
            for col in 0..7 {
                if mapper.cell_at_display(row, col).is_some() {
                    present += 1;
                }
            }
        }
        assert_eq!(present, 37);

        // The outermost display rows only hold cells of unshifted columns.
        let offsets = [1, 1, 0, 0, 0, 1, 1];
        for row in [0, 6] {
            for col in 0..7 {
                if mapper.cell_at_display(row, col).is_some() {
                    assert_eq!(offsets[col], 0);
                }
            }
        }
        let present_in = |row| {
            (0..7)
                .filter(|&col| mapper.cell_at_display(row, col).is_some())
                .collect::<Vec<_>>()
        };
        assert_eq!(present_in(0), [2, 3, 4]);
        assert_eq!(present_in(5), [1, 2, 3, 4, 5]);
        assert_eq!(present_in(6), [3]);
        assert_eq!(mapper.cell_at_display(0, 2), Some(9));
        assert_eq!(mapper.cell_at_display(6, 3), Some(21));
        assert_eq!(mapper.cell_at_display(0, 7), None);
    }

    proptest! {
        #[test]
        fn test_display_roundtrip(row in 0usize..8, col in 0usize..8) {
            for mapper in mappers() {
                if let Some(index) = mapper.cell_at_display(row, col) {
                    prop_assert_eq!(
                        mapper.display_position(index),
                        Some(DisplayPosition { row, col })
                    );
                }
            }
        }
    }
}
