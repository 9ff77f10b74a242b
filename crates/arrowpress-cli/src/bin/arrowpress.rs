//! Interactive solver for the arrow rotation puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin arrowpress
//! cargo run --bin arrowpress -- --mode hard --input 1212121212121212121212121212121212121
//! ```
//!
//! Set `RUST_LOG=debug` to trace input handling and solving.

use std::{io, process};

use arrowpress_cli::{Args, run};
use clap::Parser as _;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    if let Err(err) = run(&args, &mut input, &mut output) {
        log::error!("session failed: {err:?}");
        eprintln!("{err}");
        process::exit(1);
    }
}
