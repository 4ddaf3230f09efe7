//! Command implementations
//!
//! The console-facing side of the game: prompting, the pre-game questions and the turn loop.

pub mod console;
pub mod play;
pub mod setup;

pub use console::{Console, ConsoleError};
pub use play::{GameReport, TURN_PROMPT, farewell_on_interrupt, play_session, run_game};
pub use setup::{ask_consent, choose_difficulty};
