//! Guessing session state machine
//!
//! A session owns one secret word and tracks which positions are revealed, which letters
//! have been tried and how many lives remain. Every operation returns a structured result;
//! nothing here prints or prompts.
//!
//! ```text
//! InProgress ──quit──────────────────────────► Quit
//! InProgress ──guess completes the word──────► Won
//! InProgress ──lives hit zero, word unsolved─► Lost
//! ```
//!
//! `Quit`, `Won` and `Lost` are absorbing: once reached, every operation reports
//! `Finished` and leaves the session untouched.

use super::SecretWord;
use crate::config::SessionConfig;
use crate::selection::IndexSource;
use rustc_hash::FxHashSet;

/// Placeholder shown for unrevealed positions
pub const PLACEHOLDER: char = '_';

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
    Quit,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter occurs in the word; every matching position is now revealed
    Hit,
    /// Letter is absent; one life was spent
    Miss,
    /// Letter was already tried; nothing changed
    AlreadyTried,
    /// Not exactly one alphabetic character; nothing changed
    InvalidInput,
    /// Session already ended; nothing changed
    Finished,
}

/// Result of asking for a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// First unrevealed, untried letter of the word
    Letter(char),
    /// Every letter is revealed or tried
    Unavailable,
    /// The tier has hints turned off
    Disabled,
    /// Session already ended
    Finished,
}

/// One game's worth of state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessingSession {
    secret: SecretWord,
    revealed: Vec<bool>,
    tried: FxHashSet<char>,
    lives_remaining: u32,
    starting_lives: u32,
    hints_enabled: bool,
    guesses_made: usize,
    outcome: Outcome,
}

impl GuessingSession {
    /// Start a session, drawing the secret word from the config's pool via `source`
    #[must_use]
    pub fn new<S: IndexSource + ?Sized>(config: &SessionConfig, source: &mut S) -> Self {
        let pool = config.word_pool();
        let index = source.pick_index(pool.len()).min(pool.len().saturating_sub(1));
        let secret = pool[index].clone();

        tracing::debug!(secret = %secret, index, "secret word selected");

        Self {
            revealed: vec![false; secret.len()],
            secret,
            tried: FxHashSet::default(),
            lives_remaining: config.starting_lives(),
            starting_lives: config.starting_lives(),
            hints_enabled: config.hints_enabled(),
            guesses_made: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// End the session at the player's request
    ///
    /// Has no effect once the session is over. Returns the resulting outcome.
    pub fn submit_quit(&mut self) -> Outcome {
        if self.outcome == Outcome::InProgress {
            self.outcome = Outcome::Quit;
            tracing::debug!("player quit");
        }
        self.outcome
    }

    /// Suggest a letter without changing any state
    ///
    /// Scans the word left to right and returns the first letter whose position is not
    /// yet revealed and which has not been tried.
    #[must_use]
    pub fn submit_hint_request(&self) -> HintOutcome {
        if self.outcome.is_terminal() {
            return HintOutcome::Finished;
        }
        if !self.hints_enabled {
            return HintOutcome::Disabled;
        }

        self.secret
            .chars()
            .iter()
            .zip(&self.revealed)
            .find(|&(ch, &shown)| !shown && !self.tried.contains(ch))
            .map_or(HintOutcome::Unavailable, |(&ch, _)| HintOutcome::Letter(ch))
    }

    /// Apply one letter guess
    ///
    /// ASCII letters are case-folded before matching.
    pub fn submit_guess(&mut self, input: &str) -> GuessOutcome {
        if self.outcome.is_terminal() {
            return GuessOutcome::Finished;
        }

        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => c.to_ascii_lowercase(),
            _ => return GuessOutcome::InvalidInput,
        };

        if !self.tried.insert(letter) {
            return GuessOutcome::AlreadyTried;
        }
        self.guesses_made += 1;

        let result = if self.secret.has_letter(letter) {
            for &position in self.secret.positions_of(letter) {
                self.revealed[position] = true;
            }
            GuessOutcome::Hit
        } else {
            self.lives_remaining = self.lives_remaining.saturating_sub(1);
            GuessOutcome::Miss
        };

        self.outcome = if self.is_complete() {
            Outcome::Won
        } else if self.lives_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        tracing::debug!(
            %letter,
            ?result,
            lives = self.lives_remaining,
            outcome = ?self.outcome,
            "guess applied"
        );

        result
    }

    #[inline]
    #[must_use]
    pub const fn secret_word(&self) -> &SecretWord {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn revealed_mask(&self) -> &[bool] {
        &self.revealed
    }

    /// Whether a letter has already been guessed
    #[inline]
    #[must_use]
    pub fn has_tried(&self, letter: char) -> bool {
        self.tried.contains(&letter)
    }

    /// Tried letters in alphabetical order
    #[must_use]
    pub fn tried_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.tried.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[inline]
    #[must_use]
    pub const fn lives_remaining(&self) -> u32 {
        self.lives_remaining
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

    /// Number of accepted guesses (hits and misses)
    #[inline]
    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses_made
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once every position is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|&shown| shown)
    }

    /// Current view of the word: revealed letters, [`PLACEHOLDER`] elsewhere
    #[must_use]
    pub fn progress(&self) -> Vec<char> {
        self.secret
            .chars()
            .iter()
            .zip(&self.revealed)
            .map(|(&ch, &shown)| if shown { ch } else { PLACEHOLDER })
            .collect()
    }
}
