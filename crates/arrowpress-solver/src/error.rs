use arrowpress_core::{BoardTopology, VectorError};

/// Errors that can occur while solving a board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum SolveError {
    /// The board was laid out on a different topology than the solver's.
    #[display("board topology mismatch: expected {expected}, found {found}")]
    TopologyMismatch {
        /// Topology the solver was built for.
        expected: BoardTopology,
        /// Topology of the supplied vector.
        found: BoardTopology,
    },
    /// A vector produced during solving was malformed.
    #[display("invalid vector: {_0}")]
    Vector(#[from] VectorError),
}
