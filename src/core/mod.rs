//! Core domain types for the guessing game
//!
//! This module contains the secret word, player actions and the session state machine.
//! All types here are pure and never touch the console.

mod action;
mod session;
mod word;

pub use action::{HINT_MARKER, PlayerAction, QUIT_MARKER};
pub use session::{GuessOutcome, GuessingSession, HintOutcome, Outcome, PLACEHOLDER};
pub use word::{MIN_WORD_LEN, SecretWord, WordError};
