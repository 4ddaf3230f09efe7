//! Dinosaur Name Guessing Game
//!
//! Guess a hidden dinosaur name one letter at a time before your lives run out.
//!
//! # Quick Start
//!
//! ```rust
//! use dino_guess::config::{ConfigTable, DifficultyTier};
//! use dino_guess::core::{GuessOutcome, GuessingSession, Outcome};
//! use dino_guess::selection::FixedIndex;
//!
//! let table = ConfigTable::standard().unwrap();
//! let config = table.resolve(DifficultyTier::Easy);
//!
//! // Index 0 of the easy pool is "trex"
//! let mut session = GuessingSession::new(config, &mut FixedIndex(0));
//! assert_eq!(session.submit_guess("t"), GuessOutcome::Hit);
//! assert_eq!(session.submit_guess("q"), GuessOutcome::Miss);
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Difficulty tiers and their parameters
pub mod config;

// Secret word selection
pub mod selection;

// Word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
