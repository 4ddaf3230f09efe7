//! Word pools for each difficulty tier
//!
//! Provides embedded dinosaur names compiled into the binary, one pool per tier.

mod embedded;

pub use embedded::{
    EASY_WORDS, EASY_WORDS_COUNT, HARD_WORDS, HARD_WORDS_COUNT, MEDIUM_WORDS, MEDIUM_WORDS_COUNT,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(EASY_WORDS.len(), EASY_WORDS_COUNT);
        assert_eq!(MEDIUM_WORDS.len(), MEDIUM_WORDS_COUNT);
        assert_eq!(HARD_WORDS.len(), HARD_WORDS_COUNT);
    }

    #[test]
    fn pools_are_lowercase_alphabetic() {
        for &word in EASY_WORDS.iter().chain(MEDIUM_WORDS).chain(HARD_WORDS) {
            assert!(word.len() >= 2, "Word '{word}' is too short");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn pools_have_no_duplicates() {
        for pool in [EASY_WORDS, MEDIUM_WORDS, HARD_WORDS] {
            let unique: std::collections::HashSet<_> = pool.iter().collect();
            assert_eq!(unique.len(), pool.len());
        }
    }

    #[test]
    fn harder_tiers_use_longer_names() {
        let shortest = |pool: &[&str]| pool.iter().map(|w| w.len()).min().unwrap_or(0);
        let longest = |pool: &[&str]| pool.iter().map(|w| w.len()).max().unwrap_or(0);

        assert!(longest(EASY_WORDS) < shortest(MEDIUM_WORDS));
        assert!(longest(MEDIUM_WORDS) < shortest(HARD_WORDS));
    }

    #[test]
    fn expected_counts() {
        assert_eq!(EASY_WORDS_COUNT, 6, "Expected 6 easy words");
        assert_eq!(MEDIUM_WORDS_COUNT, 5, "Expected 5 medium words");
        assert_eq!(HARD_WORDS_COUNT, 4, "Expected 4 hard words");
    }
}
