//! Game dictionary
//!
//! Two word sets: the answers a hidden target is drawn from, and the larger set
//! of words accepted as guesses. Both are immutable once built. Every answer
//! is expected to be an allowed guess too; that is a precondition of the data,
//! checked by `openwordle verify` rather than at construction.

pub mod loader;

mod embedded {
    include!(concat!(env!("OUT_DIR"), "/answers.rs"));
    include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
}

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use loader::words_from_slice;
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Error type for dictionaries that cannot host a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("Answer list is empty")]
    NoAnswers,
    #[error("Word '{word}' has {actual} letters, expected {expected}")]
    MixedLengths {
        word: String,
        expected: usize,
        actual: usize,
    },
}

/// Answers plus allowed guesses, all of one word length
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary from answer and allowed-guess lists
    ///
    /// # Errors
    /// Returns `DictionaryError::NoAnswers` if `answers` is empty and
    /// `DictionaryError::MixedLengths` if any word differs in length from the
    /// first answer.
    ///
    /// # Examples
    /// ```
    /// use openwordle::core::Word;
    /// use openwordle::dictionary::Dictionary;
    ///
    /// let answers = vec![Word::new("crate").unwrap()];
    /// let allowed = vec![Word::new("crate").unwrap(), Word::new("react").unwrap()];
    /// let dictionary = Dictionary::new(answers, allowed).unwrap();
    ///
    /// assert!(dictionary.is_allowed_guess("react"));
    /// assert!(!dictionary.is_allowed_guess("zzzzz"));
    /// assert_eq!(dictionary.word_length(), 5);
    /// ```
    pub fn new(
        answers: Vec<Word>,
        allowed: impl IntoIterator<Item = Word>,
    ) -> Result<Self, DictionaryError> {
        let dictionary = Self::from_parts(answers, allowed);

        if dictionary.answers.is_empty() {
            return Err(DictionaryError::NoAnswers);
        }

        let expected = dictionary.word_length;
        if let Some(word) = dictionary
            .answers
            .iter()
            .chain(dictionary.allowed.iter())
            .find(|w| w.len() != expected)
        {
            return Err(DictionaryError::MixedLengths {
                word: word.text().to_string(),
                expected,
                actual: word.len(),
            });
        }

        Ok(dictionary)
    }

    /// The word lists embedded at build time from `data/`
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_parts(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    fn from_parts(answers: Vec<Word>, allowed: impl IntoIterator<Item = Word>) -> Self {
        let word_length = answers.first().map_or(0, Word::len);
        Self {
            answers,
            allowed: allowed.into_iter().collect(),
            word_length,
        }
    }

    /// Draw one answer uniformly at random
    pub fn pick_random_answer<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.answers[rng.random_range(0..self.answers.len())]
    }

    /// Case-sensitive membership test against the allowed guesses
    #[must_use]
    pub fn is_allowed_guess(&self, word: &str) -> bool {
        self.allowed.contains(word)
    }

    /// Look up an allowed guess, returning the stored word
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&Word> {
        self.allowed.get(word)
    }

    /// Answers that are not accepted as guesses
    ///
    /// Empty for well-formed data.
    #[must_use]
    pub fn missing_answers(&self) -> Vec<&Word> {
        self.answers
            .iter()
            .filter(|w| !self.allowed.contains(w.text()))
            .collect()
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Iterate the allowed guesses in no particular order
    pub fn allowed(&self) -> impl Iterator<Item = &Word> {
        self.allowed.iter()
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Letter count shared by every word
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}
