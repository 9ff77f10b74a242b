//! Mode selection menu.

use std::io::{BufRead, Write};

use arrowpress_solver::Mode;
use log::{debug, warn};

use crate::CliError;

/// Returns the menu line describing `mode`.
#[must_use]
pub fn describe(mode: Mode) -> &'static str {
    match mode {
        Mode::Easy => "3×3, 4 orientations (1=↑, 2=→, 3=↓, 4=←)",
        Mode::Medium => "4×4, 4 orientations (1=↑, 2=→, 3=↓, 4=←)",
        Mode::Hard => "37-cell hexagon, 2 orientations (1=↑, 2=↓)",
        Mode::Expert => "37-cell hexagon, 6 orientations (1–6, clockwise from ↑)",
    }
}

/// Interprets a menu answer.
///
/// Accepts the menu numbers `1`–`4` and the mode names, ignoring case and
/// surrounding whitespace.
///
/// # Examples
///
/// ```
/// use arrowpress_cli::menu::parse_choice;
/// use arrowpress_solver::Mode;
///
/// assert_eq!(parse_choice("2"), Some(Mode::Medium));
/// assert_eq!(parse_choice(" Expert\n"), Some(Mode::Expert));
/// assert_eq!(parse_choice("5"), None);
/// ```
#[must_use]
pub fn parse_choice(choice: &str) -> Option<Mode> {
    let choice = choice.trim();
    Mode::ALL.into_iter().enumerate().find_map(|(i, mode)| {
        let matches =
            choice == (i + 1).to_string() || choice.eq_ignore_ascii_case(mode.name());
        matches.then_some(mode)
    })
}

/// Writes the menu to `output`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_menu<W: Write>(output: &mut W) -> Result<(), CliError> {
    writeln!(output, "Select a mode:")?;
    for (i, mode) in Mode::ALL.into_iter().enumerate() {
        writeln!(output, " {}) {:<6} : {}", i + 1, mode.name(), describe(mode))?;
    }
    write!(output, "Enter a number (1–4): ")?;
    output.flush()?;
    Ok(())
}

/// Shows the menu and reads one answer.
///
/// # Errors
///
/// - [`CliError::InvalidMode`] if the answer names no mode. The caller is
///   expected to end the program.
/// - [`CliError::UnexpectedEof`] if the input is exhausted.
/// - [`CliError::Io`] if reading or writing fails.
pub fn select_mode<R, W>(input: &mut R, output: &mut W) -> Result<Mode, CliError>
where
    R: BufRead,
    W: Write,
{
    write_menu(output)?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::UnexpectedEof);
    }
    match parse_choice(&line) {
        Some(mode) => {
            debug!("menu selected {mode}");
            Ok(mode)
        }
        None => {
            let choice = line.trim().to_owned();
            warn!("rejected menu choice {choice:?}");
            Err(CliError::InvalidMode { choice })
        }
    }
}
