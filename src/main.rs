//! Dinosaur Name Guessing Game - CLI
//!
//! Asks for consent and a difficulty, then runs one game on the terminal.

use anyhow::Result;
use clap::Parser;
use dino_guess::{
    commands::{Console, farewell_on_interrupt, run_game},
    config::ConfigTable,
    selection::ThreadRngSource,
};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dino_guess",
    about = "Guess the hidden dinosaur name one letter at a time before your lives run out",
    version,
    author
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Logs go to stderr and stay quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    ctrlc::set_handler(|| {
        let mut stdout = io::stdout();
        let _ = farewell_on_interrupt(&mut stdout, "signal");
        let _ = stdout.flush();
        std::process::exit(0);
    })?;

    let table = ConfigTable::standard()?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match run_game(&mut console, &table, &mut ThreadRngSource) {
        Ok(_) => Ok(()),
        Err(err) if err.is_interrupt() => {
            farewell_on_interrupt(console.out(), &err.to_string())?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
