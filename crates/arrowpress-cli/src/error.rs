use std::io;

use arrowpress_solver::SolveError;

/// Errors that end a console session.
#[derive(
    Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant,
)]
pub enum CliError {
    /// The menu choice is not one of the four modes.
    #[display("invalid choice {choice:?}: run again and enter 1–4")]
    InvalidMode {
        /// The rejected choice, trimmed.
        choice: String,
    },
    /// Input ended before a complete answer was read.
    #[display("input ended unexpectedly")]
    UnexpectedEof,
    /// Reading from or writing to the console failed.
    #[display("console I/O failed: {_0}")]
    Io(#[from] io::Error),
    /// The solver rejected the board.
    #[display("{_0}")]
    Solve(#[from] SolveError),
}
