//! Console front end for the arrow puzzle solver.
//!
//! The flow is strictly sequential: select a mode, read and validate the
//! board, solve it, print the presses. Invalid board input is reported and
//! asked for again; an invalid mode choice ends the program.
//!
//! All I/O goes through [`BufRead`](std::io::BufRead) and
//! [`Write`](std::io::Write) so the whole session can be driven from tests.

pub use self::{app::*, args::*, error::*};

mod app;
mod args;
mod error;
pub mod menu;
pub mod prompt;
