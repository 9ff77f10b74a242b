//! Core data structures for arrow toggle puzzles.
//!
//! This crate describes the four supported boards and the vectors that flow
//! between the console front end and the solver. It has no knowledge of the
//! coupling relation itself; that lives in `arrowpress-solver`.
//!
//! # Overview
//!
//! 1. **Board geometry**
//!    - [`topology`]: [`BoardTopology`] and the fixed hexagonal profile
//!      [`HexProfile`].
//!    - [`coord`]: [`CoordinateMapper`], the bijection between flattened
//!      vector positions and board coordinates.
//!
//! 2. **Ring vectors**
//!    - [`ring`]: [`InputVector`] (1-based observed orientations),
//!      [`CouplingVector`] (0-based residues fed to the solver) and
//!      [`PressVector`] (residues produced by the solver).
//!
//! 3. **Text boundary**
//!    - [`parse`]: validation of the two accepted textual encodings.
//!    - [`render`]: the human-readable layout of a [`PressVector`].
//!
//! # Examples
//!
//! ```
//! use arrowpress_core::{BoardTopology, InputVector};
//!
//! let input = InputVector::parse(BoardTopology::EASY, "123412341")?;
//! let coupling = input.to_coupling();
//! assert_eq!(coupling.values(), &[0, 1, 2, 3, 0, 1, 2, 3, 0]);
//! # Ok::<(), arrowpress_core::InputError>(())
//! ```

pub mod coord;
pub mod parse;
pub mod render;
pub mod ring;
pub mod topology;

pub use self::{
    coord::{Coordinate, CoordinateMapper, DisplayPosition},
    parse::{InputError, parse_values},
    render::Rendering,
    ring::{
        Coupling, CouplingVector, InputVector, PressVector, Presses, RingVector, VectorError,
    },
    topology::{BoardTopology, HEX_COLUMN_LENGTHS, HEX_COLUMNS, HEX_PROFILE, HexProfile, Layout},
};
