use std::io::{BufRead, Write};

use arrowpress_core::{BoardTopology, Rendering};
use arrowpress_solver::Mode;
use log::info;

use crate::{Args, CliError, menu, prompt};

fn solution_header(topology: BoardTopology) -> &'static str {
    if topology.is_hex() {
        "Solution — presses per cell (hex layout):"
    } else {
        "Solution — presses per cell (row, column → presses):"
    }
}

/// Runs one console session: select a mode, read a board, print its solution.
///
/// # Errors
///
/// Returns an error if the mode choice is invalid, the input ends early, or
/// console I/O fails. Every valid board is answered, including boards the
/// presses cannot fully solve.
pub fn run<R, W>(args: &Args, input: &mut R, output: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let mode = match args.mode {
        Some(mode) => Mode::from(mode),
        None => menu::select_mode(input, output)?,
    };
    let topology = mode.topology();
    info!("mode {mode}: {topology}");

    let board = prompt::read_board(topology, args.input.as_deref(), input, output)?;
    let presses = mode.solve(&board.to_coupling())?;
    info!(
        "solved with {} presses in total",
        presses.values().iter().map(|&v| u32::from(v)).sum::<u32>()
    );

    writeln!(output)?;
    writeln!(output, "{}", solution_header(topology))?;
    write!(output, "{}", Rendering::new(&presses))?;
    output.flush()?;
    Ok(())
}
