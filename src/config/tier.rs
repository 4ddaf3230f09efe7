//! Difficulty tiers

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named difficulty configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

/// Error for difficulty text that names no tier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid difficulty. Choose from: easy, medium, hard")]
pub struct TierParseError(pub String);

impl DifficultyTier {
    /// Every tier, in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lowercase name as typed by the player
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for DifficultyTier {
    type Err = TierParseError;

    /// Parse a tier name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.name() == normalized)
            .ok_or(TierParseError(normalized))
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!("easy".parse::<DifficultyTier>(), Ok(DifficultyTier::Easy));
        assert_eq!(" Medium ".parse::<DifficultyTier>(), Ok(DifficultyTier::Medium));
        assert_eq!("HARD\n".parse::<DifficultyTier>(), Ok(DifficultyTier::Hard));
    }

    #[test]
    fn parse_unknown_name() {
        let err = "extreme".parse::<DifficultyTier>().unwrap_err();
        assert_eq!(err, TierParseError("extreme".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid difficulty. Choose from: easy, medium, hard"
        );
    }

    #[test]
    fn display_round_trips_through_name() {
        for tier in DifficultyTier::ALL {
            assert_eq!(tier.to_string().parse::<DifficultyTier>(), Ok(tier));
        }
    }
}
