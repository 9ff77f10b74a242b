//! Human-readable layout of press counts.
//!
//! Square boards print one line per cell in vector order:
//!
//! ```text
//! (1,1) → 0
//! (1,2) → 3
//! ...
//! ```
//!
//! Hexagonal boards print the display grid, one token per column separated by
//! a single space. Positions outside the board are a blank placeholder, so a
//! row with three cells in the middle columns reads `"    0 1 0    "`.

use std::fmt::{self, Display};

use crate::{coord::CoordinateMapper, ring::PressVector, topology::Layout};

/// Placeholder for display positions without a cell.
pub const BLANK: &str = " ";

/// A [`PressVector`] laid out for display.
///
/// # Examples
///
/// ```
/// use arrowpress_core::{BoardTopology, PressVector, Rendering};
///
/// let presses = PressVector::new(BoardTopology::EASY, vec![0, 1, 2, 3, 0, 1, 2, 3, 0])?;
/// let text = Rendering::new(&presses).to_string();
/// assert_eq!(text.lines().nth(1), Some("(1,2) → 1"));
/// # Ok::<(), arrowpress_core::VectorError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rendering<'a> {
    presses: &'a PressVector,
    mapper: CoordinateMapper,
}

impl<'a> Rendering<'a> {
    /// Creates a rendering using the mapper of the vector's own topology.
    #[must_use]
    pub fn new(presses: &'a PressVector) -> Self {
        Self {
            presses,
            mapper: CoordinateMapper::new(presses.topology().layout()),
        }
    }

    /// Returns the display lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let values = self.presses.values();
        match self.mapper.layout() {
            Layout::Square { .. } => self
                .mapper
                .coordinates()
                .zip(values)
                .map(|(coord, presses)| format!("{coord} → {presses}"))
                .collect(),
            Layout::Hex(_) => (0..self.mapper.display_rows())
                .map(|row| {
                    (0..self.mapper.display_columns())
                        .map(|col| match self.mapper.cell_at_display(row, col) {
                            Some(index) => values[index].to_string(),
                            None => BLANK.to_owned(),
                        })
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect(),
        }
    }
}

impl Display for Rendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
