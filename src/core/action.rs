//! Player actions read from the console
//!
//! One line of input becomes exactly one `PlayerAction`:
//! - `*` quits the game
//! - `?` asks for a hint
//! - anything else is handed to the session as a letter guess, which does its own validation

/// Input that ends the game
pub const QUIT_MARKER: &str = "*";

/// Input that requests a hint
pub const HINT_MARKER: &str = "?";

/// A single turn's worth of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Quit,
    Hint,
    /// Normalized (trimmed, lowercased) text to submit as a guess
    Guess(String),
}

impl PlayerAction {
    /// Classify a raw input line
    ///
    /// Surrounding whitespace is ignored and the text is lowercased.
    ///
    /// # Examples
    /// ```
    /// use dino_guess::core::PlayerAction;
    ///
    /// assert_eq!(PlayerAction::parse(" * "), PlayerAction::Quit);
    /// assert_eq!(PlayerAction::parse("?"), PlayerAction::Hint);
    /// assert_eq!(PlayerAction::parse("T\n"), PlayerAction::Guess("t".to_string()));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            QUIT_MARKER => Self::Quit,
            HINT_MARKER => Self::Hint,
            _ => Self::Guess(normalized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_markers() {
        assert_eq!(PlayerAction::parse("*"), PlayerAction::Quit);
        assert_eq!(PlayerAction::parse("?"), PlayerAction::Hint);
        assert_eq!(PlayerAction::parse("  ?\t"), PlayerAction::Hint);
    }

    #[test]
    fn parse_letter_is_lowercased() {
        assert_eq!(PlayerAction::parse("R"), PlayerAction::Guess("r".into()));
        assert_eq!(PlayerAction::parse(" x "), PlayerAction::Guess("x".into()));
    }

    #[test]
    fn parse_passes_malformed_text_through() {
        // Validation belongs to the session; the parser only normalizes
        assert_eq!(PlayerAction::parse("ab"), PlayerAction::Guess("ab".into()));
        assert_eq!(PlayerAction::parse(""), PlayerAction::Guess(String::new()));
        assert_eq!(PlayerAction::parse("**"), PlayerAction::Guess("**".into()));
    }
}
