//! Game word representation
//!
//! A Word stores a lowercase ASCII word of any non-zero length along with its letters,
//! so the scoring code can index positions without re-decoding the string.

use super::LetterCounts;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A lowercase word used as a target or a guess
///
/// Equality and hashing only look at the text, so a `FxHashSet<Word>` can be
/// queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, lower-casing it
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use openwordle::core::Word;
    ///
    /// let word = Word::new("Crate").unwrap();
    /// assert_eq!(word.text(), "crate");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("cr4te").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        text.make_ascii_lowercase();
        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in position order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Count each letter of the word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::from_letters(&self.letters)
    }
}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crate").unwrap();
        assert_eq!(word.text(), "crate");
        assert_eq!(word.letters(), &['c', 'r', 'a', 't', 'e']);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRATE").unwrap();
        assert_eq!(word.text(), "crate");

        let word2 = Word::new("CrAtE").unwrap();
        assert_eq!(word2.text(), "crate");
    }

    #[test]
    fn word_length_is_not_fixed() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("puzzles").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("caf\u{e9}s"), Err(WordError::NonAscii));
        // Kelvin sign lowercases to ASCII 'k' under Unicode rules
        assert_eq!(Word::new("\u{212a}nife"), Err(WordError::NonAscii));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cra e"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let counts = Word::new("level").unwrap().letter_counts();
        assert_eq!(counts.get('l'), 2);
        assert_eq!(counts.get('e'), 2);
        assert_eq!(counts.get('v'), 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn word_set_lookup_by_str() {
        let set: FxHashSet<Word> = ["crate", "react"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .collect();

        assert!(set.contains("crate"));
        assert_eq!(set.get("react").map(Word::text), Some("react"));
        assert!(!set.contains("Crate"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crate").unwrap();
        assert_eq!(format!("{word}"), "crate");
    }
}
