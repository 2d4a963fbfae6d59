//! TUI application state and logic

use crate::core::{Difficulty, Word};
use crate::game::{Game, GameError, Outcome};
use crate::output::win_message;
use crate::stats::KeyValueStore;
use crate::validation::Validator;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// How long to wait for a key before checking on a running word lookup
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a, K: KeyValueStore> {
    pub game: Game<'a, K>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Bumped on every new round so late lookup results can be discarded
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// A submitted word waiting for validation off the UI thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRequest {
    pub word: Word,
    pub generation: u64,
}

impl<'a, K: KeyValueStore> App<'a, K> {
    #[must_use]
    pub fn new(game: Game<'a, K>) -> Self {
        let difficulty = game.round().difficulty();
        let mut app = Self {
            game,
            messages: Vec::new(),
            should_quit: false,
            generation: 0,
        };
        app.add_message(
            &format!("New {difficulty} game. Type a word and press Enter."),
            MessageStyle::Info,
        );
        app
    }

    /// React to a key press
    ///
    /// Returns a request when a guess needs validating; the caller runs the
    /// validator and reports back through [`App::apply_verdict`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<CheckRequest> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        // Chords never type letters
        let chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::META);
        let over = self.game.round().outcome().is_over();

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_round(self.game.round().difficulty()),
            KeyCode::Tab => self.new_round(self.game.round().difficulty().next()),
            KeyCode::Char('q') if over => self.should_quit = true,
            KeyCode::Char('n') if over => self.new_round(self.game.round().difficulty()),
            KeyCode::Char(c) if !chord => {
                self.game.append_letter(c);
            }
            KeyCode::Backspace => {
                self.game.delete_letter();
            }
            KeyCode::Enter => return self.begin_submit(),
            _ => {}
        }
        None
    }

    fn begin_submit(&mut self) -> Option<CheckRequest> {
        match self.game.begin_submit() {
            Ok(word) => {
                self.add_message(&format!("Checking {word}..."), MessageStyle::Info);
                Some(CheckRequest {
                    word,
                    generation: self.generation,
                })
            }
            Err(e) => {
                self.report_error(&e);
                None
            }
        }
    }

    /// Apply a validation result produced for `generation`
    pub fn apply_verdict(&mut self, generation: u64, accepted: bool) {
        if generation != self.generation {
            debug!("discarding lookup result from an earlier round");
            return;
        }

        match self.game.resolve_submit(accepted) {
            Ok(submission) => match submission.outcome {
                Outcome::Won => {
                    let praise = win_message(self.game.round().guesses().len());
                    self.add_message(praise, MessageStyle::Success);
                }
                Outcome::Lost => {
                    let secret = self.game.round().secret();
                    self.add_message(&format!("The word was {secret}"), MessageStyle::Error);
                }
                Outcome::InProgress => {
                    let left = self.game.round().attempts_left();
                    self.add_message(&format!("{left} guesses left"), MessageStyle::Info);
                }
            },
            Err(e) => self.report_error(&e),
        }
    }

    /// Replace the round; always allowed
    pub fn new_round(&mut self, difficulty: Difficulty) {
        self.generation += 1;
        self.game.reset(difficulty);
        self.messages.clear();
        self.add_message(&format!("New {difficulty} game started!"), MessageStyle::Info);
    }

    fn report_error(&mut self, error: &GameError) {
        let text = match error {
            GameError::InvalidWord(_) => "Not in word list".to_string(),
            other => other.to_string(),
        };
        self.add_message(&text, MessageStyle::Error);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 3 messages
        if self.messages.len() > 3 {
            self.messages.remove(0);
        }
    }

    /// Is a guess being validated right now?
    #[must_use]
    pub fn is_checking(&self) -> bool {
        self.game.round().is_pending()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<K: KeyValueStore>(mut app: App<'_, K>, validator: &Validator<'_>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app, validator);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Event loop; word lookups run on scoped worker threads so the screen keeps
/// drawing while a guess is checked.
fn run_app<B: ratatui::backend::Backend, K: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, K>,
    validator: &Validator<'_>,
) -> Result<()> {
    thread::scope(|scope| -> Result<()> {
        let (tx, rx) = mpsc::channel::<(u64, bool)>();

        loop {
            while let Ok((generation, accepted)) = rx.try_recv() {
                app.apply_verdict(generation, accepted);
            }

            terminal.draw(|f| super::rendering::ui(f, app))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                // Only process key press events (fixes Windows double-input bug)
                && key.kind == KeyEventKind::Press
                && let Some(request) = app.handle_key(key)
            {
                let tx = tx.clone();
                scope.spawn(move || {
                    let accepted = validator.is_acceptable(&request.word);
                    // The receiver is gone only when the app is shutting down
                    let _ = tx.send((request.generation, accepted));
                });
            }

            if app.should_quit {
                break;
            }
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{MemoryStore, StatsStore};
    use crate::wordlists::WordCatalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(catalog: &WordCatalog) -> App<'_, MemoryStore> {
        App::new(Game::with_rng(
            catalog,
            Difficulty::Easy,
            StatsStore::load(MemoryStore::new()),
            StdRng::seed_from_u64(21),
        ))
    }

    fn press(app: &mut App<'_, MemoryStore>, code: KeyCode) -> Option<CheckRequest> {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_word(app: &mut App<'_, MemoryStore>, word: &str) -> Option<CheckRequest> {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter)
    }

    #[test]
    fn enter_requests_a_check_and_locks_input() {
        let catalog = WordCatalog::embedded();
        let mut app = app(&catalog);

        let request = type_word(&mut app, "about").unwrap();
        assert_eq!(request.word.as_str(), "ABOUT");
        assert!(app.is_checking());

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.game.round().current_input(), "ABOUT");
        assert!(press(&mut app, KeyCode::Enter).is_none());

        app.apply_verdict(request.generation, true);
        assert!(!app.is_checking());
        assert_eq!(app.game.round().guesses().len(), 1);
    }

    #[test]
    fn short_guess_reports_error_without_request() {
        let catalog = WordCatalog::embedded();
        let mut app = app(&catalog);

        assert!(type_word(&mut app, "abc").is_none());
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Not enough letters");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn rejected_word_shows_message_and_keeps_input() {
        let catalog = WordCatalog::embedded();
        let mut app = app(&catalog);

        let request = type_word(&mut app, "zzxqj").unwrap();
        app.apply_verdict(request.generation, false);

        assert_eq!(app.messages.last().unwrap().text, "Not in word list");
        assert_eq!(app.game.round().current_input(), "ZZXQJ");
    }

    #[test]
    fn stale_verdict_after_new_round_is_ignored() {
        let catalog = WordCatalog::embedded();
        let mut app = app(&catalog);

        let stale = type_word(&mut app, "about").unwrap();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.game.round().difficulty(), Difficulty::Medium);

        let fresh = type_word(&mut app, "zebra").unwrap();
        app.apply_verdict(stale.generation, false);
        assert!(app.is_checking());

        app.apply_verdict(fresh.generation, true);
        assert_eq!(app.game.round().guesses().len(), 1);
        assert_eq!(app.game.round().guesses()[0].as_str(), "ZEBRA");
    }

    #[test]
    fn winning_then_n_starts_new_round() {
        let catalog = WordCatalog::embedded();
        let mut app = app(&catalog);
        let secret = app.game.round().secret();

        let request = type_word(&mut app, secret.as_str()).unwrap();
        app.apply_verdict(request.generation, true);
        assert_eq!(app.game.round().outcome(), Outcome::Won);
        assert_eq!(app.game.stats().won, 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game.round().outcome(), Outcome::InProgress);
        assert!(app.game.round().guesses().is_empty());
    }

    #[test]
    fn modifier_chords_do_not_type_letters() {
        let catalog = WordCatalog::embedded();
        let mut app = app(&catalog);

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::META));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert_eq!(app.game.round().current_input(), "");

        app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(app.game.round().current_input(), "A");
    }

    #[test]
    fn quit_keys() {
        let catalog = WordCatalog::embedded();
        let mut app = app(&catalog);

        // 'q' is a letter while the round is running
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.game.round().current_input(), "Q");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
