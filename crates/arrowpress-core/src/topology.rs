//! Static board geometry.
//!
//! Every supported board is a compile-time constant: two square grids and a
//! hexagonal board made of seven columns of lengths 4, 5, 6, 7, 6, 5, 4. The
//! hexagonal derived tables (vertical offsets and column start indices) are
//! computed once in a `const` context and shared by every mapper and renderer.

use std::fmt::{self, Display};

/// Number of columns of the hexagonal board.
pub const HEX_COLUMNS: usize = 7;

/// Column lengths of the hexagonal board, left to right.
pub const HEX_COLUMN_LENGTHS: [usize; HEX_COLUMNS] = [4, 5, 6, 7, 6, 5, 4];

/// The hexagonal board profile shared by the hard and expert modes.
pub const HEX_PROFILE: &HexProfile = &HexProfile::new(HEX_COLUMN_LENGTHS);

/// Precomputed geometry of a board made of variable-length columns.
///
/// Cells are flattened column-major: column `c` occupies the index range
/// `starts[c]..starts[c] + column_lengths[c]`. For display, each column is
/// shifted down by `offsets[c] = (max_len - column_lengths[c]) / 2` rows so
/// that shorter columns are centered against the tallest one.
///
/// # Examples
///
/// ```
/// use arrowpress_core::HEX_PROFILE;
///
/// assert_eq!(HEX_PROFILE.max_len(), 7);
/// assert_eq!(HEX_PROFILE.offsets(), &[1, 1, 0, 0, 0, 1, 1]);
/// assert_eq!(HEX_PROFILE.cell_count(), 37);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexProfile {
    column_lengths: [usize; HEX_COLUMNS],
    offsets: [usize; HEX_COLUMNS],
    starts: [usize; HEX_COLUMNS],
    max_len: usize,
    cell_count: usize,
}

impl HexProfile {
    /// Builds the derived tables for the given column lengths.
    #[must_use]
    pub const fn new(column_lengths: [usize; HEX_COLUMNS]) -> Self {
        let mut max_len = 0;
        let mut i = 0;
        while i < HEX_COLUMNS {
            if column_lengths[i] > max_len {
                max_len = column_lengths[i];
            }
            i += 1;
        }

        let mut offsets = [0; HEX_COLUMNS];
        let mut starts = [0; HEX_COLUMNS];
        let mut cell_count = 0;
        let mut i = 0;
        while i < HEX_COLUMNS {
            offsets[i] = (max_len - column_lengths[i]) / 2;
            starts[i] = cell_count;
            cell_count += column_lengths[i];
            i += 1;
        }

        Self {
            column_lengths,
            offsets,
            starts,
            max_len,
            cell_count,
        }
    }

    /// Returns the column lengths, left to right.
    #[must_use]
    pub const fn column_lengths(&self) -> &[usize] {
        &self.column_lengths
    }

    /// Returns the vertical display offset of each column.
    #[must_use]
    pub const fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Returns the flattened index of the first cell of each column.
    #[must_use]
    pub const fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Returns the length of the tallest column.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn column_count(&self) -> usize {
        HEX_COLUMNS
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }
}

/// Shape of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// A `size × size` grid flattened row-major.
    Square {
        /// Number of rows (and columns).
        size: usize,
    },
    /// A hexagonal board flattened column-major.
    Hex(&'static HexProfile),
}

impl Layout {
    /// Returns the number of cells on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        match self {
            Layout::Square { size } => size * size,
            Layout::Hex(profile) => profile.cell_count(),
        }
    }
}

/// Geometry and cycle length of one of the supported boards.
///
/// # Examples
///
/// ```
/// use arrowpress_core::BoardTopology;
///
/// assert_eq!(BoardTopology::EASY.cell_count(), 9);
/// assert_eq!(BoardTopology::MEDIUM.cell_count(), 16);
/// assert_eq!(BoardTopology::HARD.modulus(), 2);
/// assert_eq!(BoardTopology::EXPERT.cell_count(), 37);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardTopology {
    layout: Layout,
    modulus: u8,
}

impl BoardTopology {
    /// 3×3 square, four orientations.
    pub const EASY: Self = Self::new(Layout::Square { size: 3 }, 4);
    /// 4×4 square, four orientations.
    pub const MEDIUM: Self = Self::new(Layout::Square { size: 4 }, 4);
    /// Hexagonal board, two orientations.
    pub const HARD: Self = Self::new(Layout::Hex(HEX_PROFILE), 2);
    /// Hexagonal board, six orientations.
    pub const EXPERT: Self = Self::new(Layout::Hex(HEX_PROFILE), 6);

    /// Array containing all supported topologies, easiest first.
    pub const ALL: [Self; 4] = [Self::EASY, Self::MEDIUM, Self::HARD, Self::EXPERT];

    const fn new(layout: Layout, modulus: u8) -> Self {
        assert!(modulus >= 2 && modulus <= 9);
        Self { layout, modulus }
    }

    /// Returns the board shape.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the cycle length `n` of a cell state.
    #[must_use]
    pub const fn modulus(&self) -> u8 {
        self.modulus
    }

    /// Returns the number of cells on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.layout.cell_count()
    }

    /// Returns `true` for the hexagonal boards.
    #[must_use]
    pub const fn is_hex(&self) -> bool {
        matches!(self.layout, Layout::Hex(_))
    }

    /// Describes the order in which cell states are entered.
    #[must_use]
    pub fn reading_order(&self) -> String {
        match self.layout {
            Layout::Square { .. } => "rows left→right, top→bottom".to_owned(),
            Layout::Hex(profile) => {
                let lengths = profile
                    .column_lengths()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("columns left→right, each top→bottom (lengths {lengths})")
            }
        }
    }
}

impl Display for BoardTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layout {
            Layout::Square { size } => write!(f, "{size}×{size} square, mod {}", self.modulus),
            Layout::Hex(profile) => write!(
                f,
                "{}-cell hexagon, mod {}",
                profile.cell_count(),
                self.modulus
            ),
        }
    }
}
