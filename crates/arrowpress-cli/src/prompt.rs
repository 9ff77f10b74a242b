//! Board entry prompt.

use std::io::{BufRead, Write};

use arrowpress_core::{BoardTopology, InputError, InputVector};
use log::{debug, warn};

use crate::CliError;

/// Returns the prompt asking for the cell states of `topology`.
///
/// # Examples
///
/// ```
/// use arrowpress_cli::prompt::prompt_text;
/// use arrowpress_core::BoardTopology;
///
/// let text = prompt_text(BoardTopology::EASY);
/// assert!(text.starts_with("Enter 9 numbers (1–4) by rows"));
/// ```
#[must_use]
pub fn prompt_text(topology: BoardTopology) -> String {
    let example: String = (0..6).map(|i| char::from(b'1' + i % 2)).collect();
    format!(
        "Enter {} numbers (1–{}) by {}\n\
         either contiguous ('{example}...') or space-separated ('1 2 1 ...'): ",
        topology.cell_count(),
        topology.modulus(),
        topology.reading_order(),
    )
}

fn retry_message(err: &InputError) -> String {
    format!("{err}. Try again.")
}

/// Reads a valid board for `topology`, asking again after every invalid line.
///
/// If `initial` is given it is validated first; when it is invalid the error
/// is reported and the interactive prompt follows.
///
/// # Errors
///
/// - [`CliError::UnexpectedEof`] if the input ends before a valid line.
/// - [`CliError::Io`] if reading or writing fails.
pub fn read_board<R, W>(
    topology: BoardTopology,
    initial: Option<&str>,
    input: &mut R,
    output: &mut W,
) -> Result<InputVector, CliError>
where
    R: BufRead,
    W: Write,
{
    if let Some(text) = initial {
        match InputVector::parse(topology, text) {
            Ok(board) => return Ok(board),
            Err(err) => {
                warn!("rejected --input: {err}");
                writeln!(output, "{}", retry_message(&err))?;
            }
        }
    }

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt_text(topology))?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(CliError::UnexpectedEof);
        }
        match InputVector::parse(topology, &line) {
            Ok(board) => {
                debug!("accepted board {:?}", board.values());
                return Ok(board);
            }
            Err(err) => {
                warn!("rejected board input: {err}");
                writeln!(output, "{}", retry_message(&err))?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(
        topology: BoardTopology,
        initial: Option<&str>,
        input: &str,
    ) -> (Result<InputVector, CliError>, String) {
        let mut output = Vec::new();
        let result = read_board(topology, initial, &mut input.as_bytes(), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_text() {
        let text = prompt_text(BoardTopology::HARD);
        assert!(text.starts_with("Enter 37 numbers (1–2) by columns"));
        assert!(text.contains("lengths 4,5,6,7,6,5,4"));
        assert!(text.contains("'121212...'"));
    }

    #[test]
    fn test_retries_after_wrong_count() {
        let (result, output) = read(BoardTopology::EASY, None, "1 1 1 1 1 1 1 1\n111111111\n");
        assert_eq!(result.unwrap().values(), &[1; 9]);
        assert!(output.contains("expected exactly 9 values, but found 8. Try again.\n"));
        assert_eq!(output.matches("Enter 9 numbers").count(), 2);
    }

    #[test]
    fn test_retries_after_each_kind_of_error() {
        let input = "1 2 x 4 1 2 3 4 1\n1 2 3 4 5 1 2 3 4\n123412341\n";
        let (result, output) = read(BoardTopology::EASY, None, input);
        assert_eq!(result.unwrap().values(), &[1, 2, 3, 4, 1, 2, 3, 4, 1]);
        assert!(output.contains("all values must be integers, but found \"x\""));
        assert!(output.contains("values must be in the range 1–4, but found 5"));
        assert_eq!(output.matches("Enter 9 numbers").count(), 3);
    }

    #[test]
    fn test_initial_input() {
        let (result, output) = read(BoardTopology::EASY, Some("222222222"), "");
        assert_eq!(result.unwrap().values(), &[2; 9]);
        assert!(output.is_empty());

        let (result, output) = read(BoardTopology::EASY, Some("22"), "1 1 1 1 1 1 1 1 1\n");
        assert_eq!(result.unwrap().values(), &[1; 9]);
        assert!(output.starts_with("expected exactly 9 values, but found 2. Try again.\n"));
    }

    #[test]
    fn test_eof_before_valid_board() {
        let (result, _) = read(BoardTopology::MEDIUM, None, "1 2 3\n");
        assert!(result.unwrap_err().is_unexpected_eof());
    }
}
