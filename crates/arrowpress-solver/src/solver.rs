use std::fmt::Debug;

use arrowpress_core::{BoardTopology, CouplingVector, PressVector};
use log::{debug, warn};

use crate::{CouplingMatrix, SolveError, coupling::residue, modular};

/// A procedure mapping a board state to the presses that solve it.
///
/// Implementations are deterministic and side-effect free. They work over
/// `Z/nZ` for the modulus of their topology, which need not be prime, and
/// answer every board of that topology.
pub trait Solver: Debug + Send + Sync {
    /// Returns the topology this solver accepts.
    fn topology(&self) -> BoardTopology;

    /// Returns how often (mod `n`) each cell must be pressed so that every
    /// cell of `board` returns to state 0 (orientation 1).
    ///
    /// A board the presses cannot fully solve still gets an answer, one that
    /// leaves some cells unsolved.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::TopologyMismatch`] if `board` belongs to another
    /// topology.
    fn solve(&self, board: &CouplingVector) -> Result<PressVector, SolveError>;
}

/// Solves boards by linear algebra on the coupling matrix.
///
/// Finds `x` with `A·x ≡ −b (mod n)`, where `A` is the [`CouplingMatrix`] and
/// `b` the board state. When `A` is singular, cells whose presses are not
/// determined are left at zero; the result is one valid solution, not
/// necessarily the one with the fewest presses. Boards outside the image of
/// `A` are logged as unreachable and answered with the presses that satisfy
/// the equations elimination could keep.
///
/// # Examples
///
/// ```
/// use arrowpress_core::{BoardTopology, CouplingVector};
/// use arrowpress_solver::{CouplingSolver, Solver as _};
///
/// let solver = CouplingSolver::new(BoardTopology::MEDIUM);
/// let presses = solver.solve(&CouplingVector::zero(BoardTopology::MEDIUM))?;
/// assert!(presses.is_zero());
/// # Ok::<(), arrowpress_solver::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CouplingSolver {
    matrix: CouplingMatrix,
}

impl CouplingSolver {
    /// Creates a solver, building the coupling matrix of `topology`.
    #[must_use]
    pub fn new(topology: BoardTopology) -> Self {
        Self {
            matrix: CouplingMatrix::new(topology),
        }
    }

    /// Returns the coupling matrix.
    #[must_use]
    pub fn matrix(&self) -> &CouplingMatrix {
        &self.matrix
    }
}

impl Solver for CouplingSolver {
    fn topology(&self) -> BoardTopology {
        self.matrix.topology()
    }

    fn solve(&self, board: &CouplingVector) -> Result<PressVector, SolveError> {
        self.matrix.check_topology(board.topology())?;

        let topology = self.topology();
        let modulus = u32::from(topology.modulus());
        // Presses must cancel the current offsets.
        let rhs: Vec<u32> = board
            .values()
            .iter()
            .map(|&v| (modulus - u32::from(v)) % modulus)
            .collect();

        let solution = modular::solve_mod(self.matrix.rows(), &rhs, modulus);
        if !solution.consistent {
            warn!("{topology}: board is not reachable from the solved state, answer is partial");
        }
        let presses = PressVector::new(
            topology,
            solution
                .values
                .into_iter()
                .map(|v| residue(v, modulus))
                .collect(),
        )?;
        debug!("solved {topology}: presses {:?}", presses.values());
        Ok(presses)
    }
}
