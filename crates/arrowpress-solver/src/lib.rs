//! Solvers for arrow toggle puzzles.
//!
//! Pressing a cell advances it and its neighbours by one step modulo `n`.
//! This crate builds that coupling relation for each supported board
//! ([`CouplingMatrix`]), solves it over `Z/nZ` for prime and composite `n`
//! ([`CouplingSolver`]), and bundles the four fixed boards as [`Mode`].
//!
//! # Examples
//!
//! ```
//! use arrowpress_core::InputVector;
//! use arrowpress_solver::{Mode, apply_presses};
//!
//! let mode = Mode::Easy;
//! let board = InputVector::parse(mode.topology(), "211121111")?.to_coupling();
//! let presses = mode.solve(&board)?;
//!
//! // Applying the presses brings every cell back to orientation 1.
//! assert!(apply_presses(&board, &presses)?.is_zero());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{coupling::*, error::*, mode::*, solver::*};

mod coupling;
mod error;
pub mod modular;
mod mode;
mod solver;
