//! TUI application state and logic

use crate::core::{Feedback, Verdict};
use crate::dictionary::Dictionary;
use crate::game::{Game, GameConfig, GameStatus, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GameConfig,
    pub game: Game<'a>,
    pub history: Vec<Feedback>,
    pub letter_states: FxHashMap<char, Verdict>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: GameConfig, mut rng: StdRng) -> Self {
        let game = Game::with_config(dictionary, &mut rng, config);

        Self {
            dictionary,
            config,
            game,
            history: Vec::new(),
            letter_states: FxHashMap::default(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} tries. Type and press Enter.",
                    dictionary.word_length(),
                    config.max_attempts
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        }
    }

    /// Append a typed letter, up to the word length
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.game.word_length() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.game.submit_guess(&guess) {
            Ok(feedback) => {
                self.record_letters(&feedback);
                self.history.push(feedback);
                self.check_game_over();
            }
            Err(e) => {
                self.add_message(&format!("Failed to guess: {e}"), MessageStyle::Error);
                // Keep what was typed so it can be corrected
                self.input_buffer = guess;
            }
        }
    }

    fn check_game_over(&mut self) {
        match self.game.status() {
            GameStatus::InProgress => {
                let left = self.game.remaining_attempts();
                self.add_message(
                    &format!("{left} {} left", if left == 1 { "guess" } else { "guesses" }),
                    MessageStyle::Info,
                );
            }
            GameStatus::Won => {
                self.stats.record(&self.game);
                self.input_mode = InputMode::GameOver;

                let celebration = match self.game.attempts_used() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.record(&self.game);
                self.input_mode = InputMode::GameOver;

                let answer = self
                    .game
                    .revealed_target()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(&format!("Out of guesses! The word was {answer}"), MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Keep the best verdict seen for each letter
    fn record_letters(&mut self, feedback: &Feedback) {
        for (letter, verdict) in feedback.letters() {
            self.letter_states
                .entry(letter)
                .and_modify(|best| {
                    if rank(verdict) > rank(*best) {
                        *best = verdict;
                    }
                })
                .or_insert(verdict);
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::with_config(self.dictionary, &mut self.rng, self.config);
        self.history.clear();
        self.letter_states.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best verdict seen so far for a letter, if it has been guessed
    #[must_use]
    pub fn letter_state(&self, letter: char) -> Option<Verdict> {
        self.letter_states.get(&letter).copied()
    }
}

const fn rank(verdict: Verdict) -> u8 {
    match verdict {
        Verdict::Incorrect => 0,
        Verdict::Partial => 1,
        Verdict::Correct => 2,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => app.pop_char(),
                    KeyCode::Enter => app.submit_input(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use rand::SeedableRng;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crate"]),
            words_from_slice(&["crate", "react", "slate", "trace"]),
        )
        .unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
        app.submit_input();
    }

    #[test]
    fn typing_is_limited_to_word_length() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::default(), StdRng::seed_from_u64(1));

        for c in "CRATES1".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "crate");

        app.pop_char();
        assert_eq!(app.input_buffer, "crat");
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::default(), StdRng::seed_from_u64(1));

        type_word(&mut app, "abcde");

        assert_eq!(app.input_buffer, "abcde");
        assert!(app.history.is_empty());
        assert_eq!(app.game.attempts_used(), 0);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn accepted_guess_updates_board_and_keyboard() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::default(), StdRng::seed_from_u64(1));

        type_word(&mut app, "slate");

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.letter_state('s'), Some(Verdict::Incorrect));
        assert_eq!(app.letter_state('a'), Some(Verdict::Correct));
        assert_eq!(app.letter_state('z'), None);
    }

    #[test]
    fn keyboard_keeps_best_verdict() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::default(), StdRng::seed_from_u64(1));

        // 'r' is Partial in react, Correct in trace
        type_word(&mut app, "react");
        assert_eq!(app.letter_state('r'), Some(Verdict::Partial));
        type_word(&mut app, "trace");
        assert_eq!(app.letter_state('r'), Some(Verdict::Correct));
        type_word(&mut app, "react");
        assert_eq!(app.letter_state('r'), Some(Verdict::Correct));
    }

    #[test]
    fn win_switches_to_game_over_and_new_game_resets() {
        let dictionary = dictionary();
        let mut app = App::new(&dictionary, GameConfig::default(), StdRng::seed_from_u64(1));

        type_word(&mut app, "crate");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
        assert!(app.letter_states.is_empty());
        assert_eq!(app.game.attempts_used(), 0);
    }

    #[test]
    fn loss_is_recorded() {
        let dictionary = dictionary();
        let config = GameConfig::new().with_max_attempts(1);
        let mut app = App::new(&dictionary, config, StdRng::seed_from_u64(1));

        type_word(&mut app, "slate");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("The word was CRATE")));
    }
}
