//! Per-letter guess feedback and the scoring algorithm
//!
//! Feedback is one `Verdict` per guessed letter:
//! - Correct = letter in the exact target position
//! - Partial = letter present elsewhere, with occurrences still unclaimed
//! - Incorrect = no remaining occurrence of the letter
//!
//! Scoring is a single left-to-right pass that consumes letter counts eagerly.
//! An earlier Partial can use up the last occurrence of a letter before a later
//! exact-position match of that letter is reached.

use super::{LetterCounts, Word};
use std::fmt;

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Partial,
    Incorrect,
}

impl Verdict {
    /// Placeholder used for Incorrect letters in rendered feedback
    pub const PLACEHOLDER: char = '_';

    /// Render a guessed letter under this verdict
    ///
    /// Correct letters are upper-cased, Partial letters lower-cased and
    /// Incorrect letters replaced by [`Verdict::PLACEHOLDER`].
    #[inline]
    #[must_use]
    pub const fn render_letter(self, letter: char) -> char {
        match self {
            Self::Correct => letter.to_ascii_uppercase(),
            Self::Partial => letter.to_ascii_lowercase(),
            Self::Incorrect => Self::PLACEHOLDER,
        }
    }

    /// Colored square for sharing results
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Partial => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// Scored guess: the guessed word plus one verdict per letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    guess: Word,
    verdicts: Vec<Verdict>,
}

impl Feedback {
    /// Score `guess` against `target`, counting the target's letters first
    ///
    /// # Examples
    /// ```
    /// use openwordle::core::{Feedback, Verdict, Word};
    ///
    /// let target = Word::new("hello").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// // hello has two l's: index 0 (Partial) and index 2 (Correct) use both,
    /// // so the 'l' at index 3 is Incorrect even though it is in place.
    /// assert_eq!(
    ///     feedback.verdicts(),
    ///     &[
    ///         Verdict::Partial,
    ///         Verdict::Partial,
    ///         Verdict::Correct,
    ///         Verdict::Incorrect,
    ///         Verdict::Incorrect,
    ///     ]
    /// );
    /// assert_eq!(feedback.render(), "loL__");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        Self::score(guess, target, &target.letter_counts())
    }

    /// Score `guess` against `target` using precomputed target letter counts
    ///
    /// `counts` is copied; the caller's multiset is never modified.
    ///
    /// # Algorithm
    /// For each guess position in order:
    /// 1. Letter not available in the working counts: Incorrect
    /// 2. Letter matches the target at this position: Correct, consume one
    /// 3. Otherwise: Partial, consume one
    #[must_use]
    pub fn score(guess: &Word, target: &Word, counts: &LetterCounts) -> Self {
        let mut available = counts.clone();

        let verdicts = guess
            .letters()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                if !available.take(letter) {
                    Verdict::Incorrect
                } else if target.letters().get(i) == Some(&letter) {
                    Verdict::Correct
                } else {
                    Verdict::Partial
                }
            })
            .collect();

        Self {
            guess: guess.clone(),
            verdicts,
        }
    }

    /// Feedback for a guess that matches the target exactly
    #[must_use]
    pub fn all_correct(guess: &Word) -> Self {
        Self {
            guess: guess.clone(),
            verdicts: vec![Verdict::Correct; guess.len()],
        }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Iterate `(letter, verdict)` pairs in position order
    pub fn letters(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.guess
            .letters()
            .iter()
            .copied()
            .zip(self.verdicts.iter().copied())
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.verdicts.iter().all(|&v| v == Verdict::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Verdict::Correct)
    }

    #[must_use]
    pub fn count_partial(&self) -> usize {
        self.count(Verdict::Partial)
    }

    fn count(&self, verdict: Verdict) -> usize {
        self.verdicts.iter().filter(|&&v| v == verdict).count()
    }

    /// Render as text, e.g. `"cR_T_"`
    #[must_use]
    pub fn render(&self) -> String {
        self.letters()
            .map(|(letter, verdict)| verdict.render_letter(letter))
            .collect()
    }

    /// Render as colored squares, e.g. `"🟨🟩⬜🟩⬜"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().copied().map(Verdict::emoji).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
