use arrowpress_solver::Mode;
use clap::{Parser, ValueEnum};

/// Command-line arguments.
///
/// Both options are shortcuts for the interactive prompts; without them the
/// program asks for the mode and the board.
#[derive(Debug, Default, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Puzzle mode to solve, skipping the menu.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<ModeArg>,
    /// Board state to solve, skipping the first board prompt.
    ///
    /// Accepts the same encodings as the prompt. Invalid text is reported and
    /// the prompt is shown instead.
    #[arg(short, long, value_name = "STATES")]
    pub input: Option<String>,
}

/// Puzzle mode accepted by `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// 3×3 square, 4 orientations.
    Easy,
    /// 4×4 square, 4 orientations.
    Medium,
    /// Hexagon, 2 orientations.
    Hard,
    /// Hexagon, 6 orientations.
    Expert,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Easy => Mode::Easy,
            ModeArg::Medium => Mode::Medium,
            ModeArg::Hard => Mode::Hard,
            ModeArg::Expert => Mode::Expert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["arrowpress", "--mode", "expert", "-i", "1 2 3"]).unwrap();
        assert_eq!(args.mode, Some(ModeArg::Expert));
        assert_eq!(args.input.as_deref(), Some("1 2 3"));

        let args = Args::try_parse_from(["arrowpress"]).unwrap();
        assert!(args.mode.is_none());
        assert!(args.input.is_none());

        assert!(Args::try_parse_from(["arrowpress", "--mode", "insane"]).is_err());
    }

    #[test]
    fn test_mode_arg_names_match_modes() {
        for arg in ModeArg::value_variants() {
            let name = arg.to_possible_value().unwrap();
            assert_eq!(name.get_name(), Mode::from(*arg).name());
        }
    }
}
