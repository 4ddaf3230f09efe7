//! Per-tier session parameters and the lookup table that resolves them

use super::DifficultyTier;
use crate::core::{SecretWord, WordError};
use crate::wordlists::{EASY_WORDS, HARD_WORDS, MEDIUM_WORDS};
use thiserror::Error;

/// Error type for invalid tier configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Word pool must contain at least one word")]
    EmptyPool,
    #[error("Starting lives must be positive")]
    NoLives,
    #[error("Invalid word '{word}' in pool: {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
}

/// Fixed parameters of one difficulty tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    word_pool: Vec<SecretWord>,
    starting_lives: u32,
    hints_enabled: bool,
}

impl SessionConfig {
    /// Build a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the pool is empty, any word is not a valid
    /// [`SecretWord`], or `starting_lives` is zero.
    pub fn new(
        words: &[&str],
        starting_lives: u32,
        hints_enabled: bool,
    ) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        if starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }

        let word_pool = words
            .iter()
            .map(|&word| {
                SecretWord::new(word).map_err(|source| ConfigError::InvalidWord {
                    word: word.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            word_pool,
            starting_lives,
            hints_enabled,
        })
    }

    #[inline]
    #[must_use]
    pub fn word_pool(&self) -> &[SecretWord] {
        &self.word_pool
    }

    #[inline]
    #[must_use]
    pub const fn starting_lives(&self) -> u32 {
        self.starting_lives
    }

    #[inline]
    #[must_use]
    pub const fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }
}

/// Immutable tier → configuration table, built once at startup
#[derive(Debug, Clone)]
pub struct ConfigTable {
    easy: SessionConfig,
    medium: SessionConfig,
    hard: SessionConfig,
}

impl ConfigTable {
    #[must_use]
    pub const fn new(easy: SessionConfig, medium: SessionConfig, hard: SessionConfig) -> Self {
        Self { easy, medium, hard }
    }

    /// The game's built-in tiers over the embedded word pools
    ///
    /// | Tier   | Lives | Hints |
    /// |--------|-------|-------|
    /// | easy   | 7     | yes   |
    /// | medium | 5     | yes   |
    /// | hard   | 4     | no    |
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an embedded pool fails validation.
    pub fn standard() -> Result<Self, ConfigError> {
        Ok(Self::new(
            SessionConfig::new(EASY_WORDS, 7, true)?,
            SessionConfig::new(MEDIUM_WORDS, 5, true)?,
            SessionConfig::new(HARD_WORDS, 4, false)?,
        ))
    }

    /// Look up the configuration for a tier
    #[must_use]
    pub const fn resolve(&self, tier: DifficultyTier) -> &SessionConfig {
        match tier {
            DifficultyTier::Easy => &self.easy,
            DifficultyTier::Medium => &self.medium,
            DifficultyTier::Hard => &self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_builds() {
        assert!(ConfigTable::standard().is_ok());
    }

    #[test]
    fn every_tier_has_valid_pool() {
        let table = ConfigTable::standard().unwrap();

        for tier in DifficultyTier::ALL {
            let config = table.resolve(tier);
            assert!(!config.word_pool().is_empty(), "{tier} pool is empty");
            assert!(config.starting_lives() > 0);
            for word in config.word_pool() {
                assert!(word.len() >= 2, "'{word}' too short");
                assert!(
                    word.text().chars().all(|c| c.is_ascii_lowercase()),
                    "'{word}' is not lowercase alphabetic"
                );
            }
        }
    }

    #[test]
    fn standard_tier_parameters() {
        let table = ConfigTable::standard().unwrap();

        let easy = table.resolve(DifficultyTier::Easy);
        assert_eq!(easy.starting_lives(), 7);
        assert!(easy.hints_enabled());
        assert_eq!(easy.word_pool().len(), 6);
        assert_eq!(easy.word_pool()[0].text(), "trex");

        let medium = table.resolve(DifficultyTier::Medium);
        assert_eq!(medium.starting_lives(), 5);
        assert!(medium.hints_enabled());
        assert_eq!(medium.word_pool().len(), 5);

        let hard = table.resolve(DifficultyTier::Hard);
        assert_eq!(hard.starting_lives(), 4);
        assert!(!hard.hints_enabled());
        assert_eq!(hard.word_pool().len(), 4);
    }

    #[test]
    fn resolve_is_deterministic() {
        let table = ConfigTable::standard().unwrap();
        for tier in DifficultyTier::ALL {
            assert_eq!(table.resolve(tier), table.resolve(tier));
        }
    }

    #[test]
    fn rejects_empty_pool() {
        assert_eq!(SessionConfig::new(&[], 3, true), Err(ConfigError::EmptyPool));
    }

    #[test]
    fn rejects_zero_lives() {
        assert_eq!(SessionConfig::new(&["dino"], 0, true), Err(ConfigError::NoLives));
    }

    #[test]
    fn rejects_invalid_word() {
        let err = SessionConfig::new(&["dino", "t-rex"], 3, false).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidWord {
                word: "t-rex".to_string(),
                source: WordError::InvalidCharacters,
            }
        );
    }
}
