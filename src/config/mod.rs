//! Difficulty tiers and their session parameters
//!
//! The resolver is a plain lookup over an immutable table; nothing here holds state.

mod table;
mod tier;

pub use table::{ConfigError, ConfigTable, SessionConfig};
pub use tier::{DifficultyTier, TierParseError};
