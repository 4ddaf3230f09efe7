//! The game loop
//!
//! Reads one action per turn, feeds it to the session and renders the result until the
//! session reaches a terminal outcome.

use super::setup::{ask_consent, choose_difficulty};
use super::{Console, ConsoleError};
use crate::config::{ConfigTable, DifficultyTier};
use crate::core::{GuessingSession, Outcome, PlayerAction};
use crate::output::{
    print_declined, print_final, print_guess_feedback, print_hint, print_interrupted,
    print_progress, print_rules,
};
use crate::selection::IndexSource;
use std::io::{self, BufRead, Write};

/// Prompt shown before every turn
pub const TURN_PROMPT: &str = "Enter a letter (or '*' to quit, '?' for hint): ";

/// Summary of one finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub tier: DifficultyTier,
    pub outcome: Outcome,
    pub secret_word: String,
    pub lives_remaining: u32,
    pub guesses_made: usize,
}

impl GameReport {
    fn from_session(tier: DifficultyTier, session: &GuessingSession) -> Self {
        Self {
            tier,
            outcome: session.outcome(),
            secret_word: session.secret_word().text().to_string(),
            lives_remaining: session.lives_remaining(),
            guesses_made: session.guesses_made(),
        }
    }
}

/// Drive one session to a terminal outcome
///
/// # Errors
///
/// Returns a `ConsoleError` if the console fails or input ends mid-game.
pub fn play_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut GuessingSession,
) -> Result<Outcome, ConsoleError> {
    print_progress(console.out(), session)?;

    while !session.outcome().is_terminal() {
        let input = console.prompt(TURN_PROMPT)?;

        match PlayerAction::parse(&input) {
            PlayerAction::Quit => {
                session.submit_quit();
            }
            PlayerAction::Hint => {
                let hint = session.submit_hint_request();
                print_hint(console.out(), hint)?;
            }
            PlayerAction::Guess(text) => {
                let outcome = session.submit_guess(&text);
                print_guess_feedback(console.out(), outcome, session)?;
            }
        }
    }

    print_final(console.out(), session)?;
    Ok(session.outcome())
}

/// Run the full flow: consent, difficulty, rules, then one game
///
/// Returns `None` if the player declined to play.
///
/// # Errors
///
/// Returns a `ConsoleError` if the console fails or input ends before the game finishes.
pub fn run_game<R: BufRead, W: Write, S: IndexSource + ?Sized>(
    console: &mut Console<R, W>,
    table: &ConfigTable,
    source: &mut S,
) -> Result<Option<GameReport>, ConsoleError> {
    if !ask_consent(console)? {
        print_declined(console.out())?;
        tracing::info!("player declined to play");
        return Ok(None);
    }

    let tier = choose_difficulty(console)?;
    let config = table.resolve(tier);
    print_rules(
        console.out(),
        config.word_pool().len(),
        config.starting_lives(),
        config.hints_enabled(),
    )?;

    let mut session = GuessingSession::new(config, source);
    tracing::info!(
        %tier,
        word_len = session.secret_word().len(),
        lives = session.starting_lives(),
        "session started"
    );

    play_session(console, &mut session)?;

    let report = GameReport::from_session(tier, &session);
    tracing::info!(
        outcome = ?report.outcome,
        guesses = report.guesses_made,
        lives = report.lives_remaining,
        "session finished"
    );

    Ok(Some(report))
}

/// Say goodbye after the game was cut short by a signal or closed input
///
/// Logged below the default filter level; an interrupt is a normal way to leave.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn farewell_on_interrupt<W: Write>(out: &mut W, cause: &str) -> io::Result<()> {
    tracing::info!(cause, "game interrupted");
    print_interrupted(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::selection::FixedIndex;
    use std::io::Cursor;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    struct EventCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn session(word: &str, lives: u32, hints: bool) -> GuessingSession {
        let config = SessionConfig::new(&[word], lives, hints).unwrap();
        GuessingSession::new(&config, &mut FixedIndex(0))
    }

    #[test]
    fn play_until_won() {
        let mut c = console("t\nr\ne\nx\n");
        let mut s = session("trex", 7, false);

        assert_eq!(play_session(&mut c, &mut s).unwrap(), Outcome::Won);
        assert_eq!(s.lives_remaining(), 7);
    }

    #[test]
    fn play_until_lost() {
        let mut c = console("z\n");
        let mut s = session("dino", 1, true);

        assert_eq!(play_session(&mut c, &mut s).unwrap(), Outcome::Lost);
        let text = String::from_utf8(c.into_inner().1).unwrap();
        assert!(text.contains("The dinosaur was: dino"));
    }

    #[test]
    fn quit_marker_ends_game() {
        let mut c = console("d\n*\n");
        let mut s = session("dino", 3, true);

        assert_eq!(play_session(&mut c, &mut s).unwrap(), Outcome::Quit);
        let text = String::from_utf8(c.into_inner().1).unwrap();
        assert!(text.contains("Game exited. See you next time!"));
    }

    #[test]
    fn malformed_input_reprompts_without_changes() {
        let mut c = console("ab\n\n7\n*\n");
        let mut s = session("dino", 3, true);

        play_session(&mut c, &mut s).unwrap();
        assert!(s.tried_letters().is_empty());
        assert_eq!(s.lives_remaining(), 3);

        let text = String::from_utf8(c.into_inner().1).unwrap();
        assert_eq!(text.matches("single alphabetic character").count(), 3);
        assert_eq!(text.matches(TURN_PROMPT).count(), 4);
    }

    #[test]
    fn hint_marker_prints_hint() {
        let mut c = console("?\n*\n");
        let mut s = session("stego", 3, true);

        play_session(&mut c, &mut s).unwrap();
        let text = String::from_utf8(c.into_inner().1).unwrap();
        assert!(text.contains("Try the letter 's'"));
        assert!(s.tried_letters().is_empty());
    }

    #[test]
    fn input_ending_mid_game_is_interrupt() {
        let mut c = console("d\n");
        let mut s = session("dino", 3, true);

        let err = play_session(&mut c, &mut s).unwrap_err();
        assert!(err.is_interrupt());
    }

    #[test]
    fn run_game_declined() {
        let table = ConfigTable::standard().unwrap();
        let mut c = console("n\n");

        let report = run_game(&mut c, &table, &mut FixedIndex(0)).unwrap();
        assert!(report.is_none());
        let text = String::from_utf8(c.into_inner().1).unwrap();
        assert!(text.contains("Have a good day"));
    }

    #[test]
    fn run_game_reports_result() {
        let table = ConfigTable::standard().unwrap();
        // Easy pool index 0 is "trex"
        let mut c = console("y\neasy\nt\nr\ne\nx\n");

        let report = run_game(&mut c, &table, &mut FixedIndex(0)).unwrap().unwrap();
        assert_eq!(
            report,
            GameReport {
                tier: DifficultyTier::Easy,
                outcome: Outcome::Won,
                secret_word: "trex".to_string(),
                lives_remaining: 7,
                guesses_made: 4,
            }
        );
    }

    #[test]
    fn interrupt_farewell_is_quiet_at_default_level() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry()
            .with(EventCounter(Arc::clone(&warnings)).with_filter(LevelFilter::WARN));

        let mut out = Vec::new();
        tracing::subscriber::with_default(subscriber, || {
            farewell_on_interrupt(&mut out, "input stream closed").unwrap();
        });

        assert_eq!(warnings.load(Ordering::SeqCst), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "\nExiting...\n");
    }
}
