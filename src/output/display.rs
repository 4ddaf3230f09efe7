//! Display functions for game events
//!
//! Every function writes to the given sink so the game loop can run against any console.

use super::formatters::{format_progress, format_tried, lives_bar, rule};
use crate::core::{GuessOutcome, GuessingSession, HINT_MARKER, HintOutcome, Outcome, QUIT_MARKER};
use colored::Colorize;
use std::io::{self, Write};

/// Print the rules banner shown before the first turn
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_rules<W: Write>(
    out: &mut W,
    pool_size: usize,
    lives: u32,
    hints_enabled: bool,
) -> io::Result<()> {
    writeln!(out, "{}", rule().cyan())?;
    writeln!(
        out,
        "{}",
        "Welcome to the Dinosaur Name Guessing Game"
            .bright_cyan()
            .bold()
    )?;
    writeln!(
        out,
        "You will guess letters of a randomly selected dinosaur name from a pool of {pool_size} names."
    )?;
    writeln!(out, "Enter one letter at a time.")?;
    writeln!(out, "You can exit at any time by entering '{QUIT_MARKER}'.")?;
    if hints_enabled {
        writeln!(out, "Stuck? Enter '{HINT_MARKER}' for a hint.")?;
    } else {
        writeln!(out, "Hints are disabled for this difficulty.")?;
    }
    writeln!(out, "You have {lives} lives. A wrong letter costs one life.")?;
    writeln!(out, "{}", rule().cyan())
}

/// Print the current progress line
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_progress<W: Write>(out: &mut W, session: &GuessingSession) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format_progress(&session.progress()).bright_white().bold()
    )
}

/// Print the reaction to one guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_guess_feedback<W: Write>(
    out: &mut W,
    outcome: GuessOutcome,
    session: &GuessingSession,
) -> io::Result<()> {
    match outcome {
        GuessOutcome::Hit => {
            writeln!(out, "{}", "Nice! You revealed letter(s):".green())?;
            print_progress(out, session)
        }
        GuessOutcome::Miss => {
            writeln!(out, "{}", "Wrong guess. You lost a life.".red())?;
            writeln!(
                out,
                "Lives left: {} {}",
                session.lives_remaining(),
                lives_bar(session.lives_remaining(), session.starting_lives()).red()
            )?;
            writeln!(
                out,
                "Tried: {}",
                format_tried(&session.tried_letters()).bright_black()
            )?;
            print_progress(out, session)
        }
        GuessOutcome::AlreadyTried => {
            writeln!(
                out,
                "{}",
                "You've already tried that letter. Current:".yellow()
            )?;
            print_progress(out, session)
        }
        GuessOutcome::InvalidInput => writeln!(
            out,
            "{}",
            "Please enter a single alphabetic character.".red()
        ),
        GuessOutcome::Finished => writeln!(out, "The game is already over."),
    }
}

/// Print the answer to a hint request
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_hint<W: Write>(out: &mut W, hint: HintOutcome) -> io::Result<()> {
    match hint {
        HintOutcome::Letter(letter) => writeln!(
            out,
            "{}",
            format!("Hint: Try the letter '{letter}'.").bright_yellow()
        ),
        HintOutcome::Unavailable => writeln!(
            out,
            "No hints available; you've uncovered or tried all letters."
        ),
        HintOutcome::Disabled => writeln!(out, "Hints are disabled for this difficulty."),
        HintOutcome::Finished => writeln!(out, "The game is already over."),
    }
}

/// Print the closing message for a finished session
///
/// Prints nothing while the session is still in progress.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_final<W: Write>(out: &mut W, session: &GuessingSession) -> io::Result<()> {
    let word = session.secret_word().text();

    match session.outcome() {
        Outcome::Won => writeln!(
            out,
            "{}",
            format!("Success! You guessed the dinosaur: {word}")
                .bright_green()
                .bold()
        ),
        Outcome::Lost => writeln!(
            out,
            "{}",
            format!("Out of lives. The dinosaur was: {word}")
                .red()
                .bold()
        ),
        Outcome::Quit => writeln!(out, "Game exited. See you next time!"),
        Outcome::InProgress => Ok(()),
    }
}

/// Print the goodbye for a player who declined to play
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_declined<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Have a good day. Let's play next time.")
}

/// Print the goodbye after the input stream was interrupted
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_interrupted<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nExiting...")
}
