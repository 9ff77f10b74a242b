use std::{
    fmt::{self, Display},
    sync::OnceLock,
};

use arrowpress_core::{BoardTopology, CouplingVector, PressVector};

use crate::{CouplingSolver, SolveError, Solver as _};

/// One of the four supported puzzle modes.
///
/// Each mode fixes a board topology, and with it the modulus and the
/// coupling relation used to solve it.
///
/// # Examples
///
/// ```
/// use arrowpress_core::CouplingVector;
/// use arrowpress_solver::Mode;
///
/// for mode in Mode::ALL {
///     let solved = CouplingVector::zero(mode.topology());
///     assert!(mode.solve(&solved)?.is_zero());
/// }
/// # Ok::<(), arrowpress_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Mode {
    /// 3×3 square, four orientations.
    Easy,
    /// 4×4 square, four orientations.
    Medium,
    /// Hexagonal board, two orientations.
    Hard,
    /// Hexagonal board, six orientations.
    Expert,
}

static SOLVERS: [OnceLock<CouplingSolver>; 4] = [const { OnceLock::new() }; 4];

impl Mode {
    /// Array containing all modes, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the mode played on `topology`.
    #[must_use]
    pub fn for_topology(topology: BoardTopology) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.topology() == topology)
    }

    /// Returns the lowercase name of the mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Easy => "easy",
            Mode::Medium => "medium",
            Mode::Hard => "hard",
            Mode::Expert => "expert",
        }
    }

    /// Returns the board topology of the mode.
    #[must_use]
    pub const fn topology(self) -> BoardTopology {
        match self {
            Mode::Easy => BoardTopology::EASY,
            Mode::Medium => BoardTopology::MEDIUM,
            Mode::Hard => BoardTopology::HARD,
            Mode::Expert => BoardTopology::EXPERT,
        }
    }

    /// Returns the solver of the mode, building it on first use.
    #[must_use]
    pub fn solver(self) -> &'static CouplingSolver {
        SOLVERS[self as usize].get_or_init(|| CouplingSolver::new(self.topology()))
    }

    /// Solves `board` with the mode's solver.
    ///
    /// # Errors
    ///
    /// See [`Solver::solve`](crate::Solver::solve).
    pub fn solve(self, board: &CouplingVector) -> Result<PressVector, SolveError> {
        self.solver().solve(board)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use arrowpress_core::InputVector;

    use super::*;
    use crate::apply_presses;

    #[test]
    fn test_mode_topologies() {
        let summary: Vec<_> = Mode::ALL
            .iter()
            .map(|mode| {
                let topology = mode.topology();
                (mode.name(), topology.cell_count(), topology.modulus())
            })
            .collect();
        assert_eq!(
            summary,
            [
                ("easy", 9, 4),
                ("medium", 16, 4),
                ("hard", 37, 2),
                ("expert", 37, 6),
            ]
        );
        assert_eq!(Mode::Expert.to_string(), "expert");
    }

    #[test]
    fn test_for_topology() {
        for mode in Mode::ALL {
            assert_eq!(Mode::for_topology(mode.topology()), Some(mode));
        }
    }

    #[test]
    fn test_solver_is_shared() {
        assert!(std::ptr::eq(Mode::Hard.solver(), Mode::Hard.solver()));
        assert_eq!(Mode::Hard.solver().matrix().topology(), BoardTopology::HARD);
    }

    #[test]
    fn test_solve_entered_board() {
        let input = InputVector::parse(Mode::Easy.topology(), "1 2 1 2 2 2 1 2 1").unwrap();
        let board = input.to_coupling();
        let presses = Mode::Easy.solve(&board).unwrap();
        // Pressing the centre once produced this board, so three more presses undo it.
        assert_eq!(presses.values(), &[0, 0, 0, 0, 3, 0, 0, 0, 0]);
        assert!(apply_presses(&board, &presses).unwrap().is_zero());
    }

    #[test]
    fn test_solve_hex_board() {
        // Scramble the solved board, print it as the player would type it, and
        // solve the parsed input.
        let topology = Mode::Hard.topology();
        let mut scramble = vec![0; 37];
        for i in [0, 18, 36] {
            scramble[i] = 1;
        }
        let scramble = PressVector::new(topology, scramble).unwrap();
        let board = apply_presses(&CouplingVector::zero(topology), &scramble).unwrap();
        let text: String = board
            .to_orientations()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(text.len(), 37);

        let board = InputVector::parse(topology, &text).unwrap().to_coupling();
        let presses = Mode::Hard.solve(&board).unwrap();
        assert!(apply_presses(&board, &presses).unwrap().is_zero());
    }
}
