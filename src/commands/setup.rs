//! Pre-game questions: consent and difficulty
//!
//! Both re-prompt until they get an acceptable answer.

use super::{Console, ConsoleError};
use crate::config::DifficultyTier;
use std::io::{BufRead, Write};

/// Ask whether the player wants to play
///
/// Accepts `y` or `n` in any case.
///
/// # Errors
///
/// Returns a `ConsoleError` if the console fails or input ends.
pub fn ask_consent<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<bool, ConsoleError> {
    let mut answer = console.prompt("Do you want to play the dinosaur name guessing game? (y/n): ")?;

    loop {
        match answer.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {
                writeln!(console.out(), "Invalid input, try again.")?;
                answer = console.prompt("Play the dinosaur name guessing game? (y/n): ")?;
            }
        }
    }
}

/// Ask for a difficulty tier
///
/// # Errors
///
/// Returns a `ConsoleError` if the console fails or input ends.
pub fn choose_difficulty<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<DifficultyTier, ConsoleError> {
    let names: Vec<&str> = DifficultyTier::ALL.iter().map(|t| t.name()).collect();
    writeln!(console.out(), "Choose difficulty: {}", names.join(" | "))?;

    loop {
        let answer = console.prompt("Enter difficulty: ")?;
        match answer.parse::<DifficultyTier>() {
            Ok(tier) => return Ok(tier),
            Err(e) => writeln!(console.out(), "{e}")?,
        }
    }
}
