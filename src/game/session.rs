//! Game session state machine
//!
//! A `Game` holds one hidden target, its letter counts and the turn counter.
//! Guesses are validated in a fixed order (attempts left, not yet solved,
//! length, dictionary) and an attempt is consumed only by a guess that passes
//! every check.

use super::GuessError;
use crate::core::{Feedback, LetterCounts, Word};
use crate::dictionary::Dictionary;
use rand::Rng;

/// Number of guesses allowed per game unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One game: a hidden target and the attempts spent guessing it
///
/// Borrows the dictionary, so any number of games can share one word list.
#[derive(Debug, Clone)]
pub struct Game<'d> {
    dictionary: &'d Dictionary,
    target: Word,
    counts: LetterCounts,
    attempts_used: usize,
    max_attempts: usize,
    solved: bool,
}

impl<'d> Game<'d> {
    /// Start a game with a random answer and the default attempt limit
    ///
    /// # Examples
    /// ```
    /// use openwordle::dictionary::Dictionary;
    /// use openwordle::game::Game;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let dictionary = Dictionary::embedded();
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let mut game = Game::new(&dictionary, &mut rng);
    ///
    /// assert_eq!(game.remaining_attempts(), 6);
    /// assert!(game.submit_guess("zzzzz").is_err());
    /// assert_eq!(game.remaining_attempts(), 6);
    /// ```
    pub fn new<R: Rng>(dictionary: &'d Dictionary, rng: &mut R) -> Self {
        Self::with_config(dictionary, rng, GameConfig::default())
    }

    /// Start a game with a random answer and explicit settings
    pub fn with_config<R: Rng>(
        dictionary: &'d Dictionary,
        rng: &mut R,
        config: GameConfig,
    ) -> Self {
        let target = dictionary.pick_random_answer(rng).clone();
        Self::from_target(dictionary, target, config)
    }

    /// Start a game with a known target and the default attempt limit
    ///
    /// The target does not have to be one of the dictionary's answers.
    #[must_use]
    pub fn with_target(dictionary: &'d Dictionary, target: Word) -> Self {
        Self::from_target(dictionary, target, GameConfig::default())
    }

    /// Start a game with a known target and explicit settings
    #[must_use]
    pub fn from_target(dictionary: &'d Dictionary, target: Word, config: GameConfig) -> Self {
        let counts = target.letter_counts();
        Self {
            dictionary,
            target,
            counts,
            attempts_used: 0,
            max_attempts: config.max_attempts,
            solved: false,
        }
    }

    /// Validate, count and score one guess
    ///
    /// # Errors
    /// - `AttemptsExhausted` once every attempt has been used
    /// - `AlreadySolved` after a winning guess
    /// - `InvalidLength` if the guess has a different number of characters
    ///   than the target
    /// - `NotAWord` if the guess is not an allowed guess (exact, case-sensitive)
    ///
    /// A rejected guess leaves the game untouched.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Feedback, GuessError> {
        if self.attempts_used >= self.max_attempts {
            return Err(GuessError::AttemptsExhausted);
        }

        if self.solved {
            return Err(GuessError::AlreadySolved);
        }

        let actual = raw.chars().count();
        if actual != self.target.len() {
            return Err(GuessError::InvalidLength {
                expected: self.target.len(),
                actual,
            });
        }

        let dictionary = self.dictionary;
        let guess = dictionary
            .lookup(raw)
            .ok_or_else(|| GuessError::NotAWord(raw.to_string()))?;

        self.attempts_used += 1;

        let feedback = if raw == self.target.text() {
            Feedback::all_correct(guess)
        } else {
            self.score(guess)
        };

        self.solved = feedback.is_win();
        Ok(feedback)
    }

    /// Score a word against the target without validating or counting it
    #[must_use]
    pub fn score(&self, guess: &Word) -> Feedback {
        Feedback::score(guess, &self.target, &self.counts)
    }

    /// Attempts left; never negative
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Letters per word in this game
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.solved {
            GameStatus::Won
        } else if self.attempts_used >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status(), GameStatus::InProgress)
    }

    /// The target, once the game has ended
    #[must_use]
    pub const fn revealed_target(&self) -> Option<&Word> {
        if self.is_over() {
            Some(&self.target)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }
}
