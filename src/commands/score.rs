//! Score command
//!
//! Scores a single guess against a target given on the command line.

use crate::core::{Feedback, Word, WordError};
use crate::dictionary::Dictionary;
use crate::game::{Game, GuessError};
use thiserror::Error;

/// Result of scoring one guess
pub struct ScoreResult {
    pub target: String,
    pub feedback: Feedback,
}

/// Why a guess could not be scored
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error("failed to guess: {0}")]
    Guess(#[from] GuessError),
}

/// Score `guess` against `target`
///
/// The guess goes through the same validation as in a real game; the target
/// only has to be a well-formed word.
///
/// # Errors
///
/// Returns `ScoreError::InvalidTarget` if the target is not a word and
/// `ScoreError::Guess` if the guess would be rejected by a game.
pub fn score_guess(
    dictionary: &Dictionary,
    target: &str,
    guess: &str,
) -> Result<ScoreResult, ScoreError> {
    let target_word = Word::new(target)?;
    let mut game = Game::with_target(dictionary, target_word);
    let feedback = game.submit_guess(guess)?;

    Ok(ScoreResult {
        target: target.to_ascii_lowercase(),
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    #[test]
    fn score_known_words() {
        let dictionary = Dictionary::embedded();
        let result = score_guess(&dictionary, "crate", "react").unwrap();

        assert_eq!(result.target, "crate");
        assert_eq!(result.feedback.render(), "reAct");
    }

    #[test]
    fn target_may_be_uppercase() {
        let dictionary = Dictionary::embedded();
        let result = score_guess(&dictionary, "CRATE", "crate").unwrap();

        assert_eq!(result.target, "crate");
        assert!(result.feedback.is_win());
    }

    #[test]
    fn invalid_target() {
        let dictionary = Dictionary::embedded();
        let err = score_guess(&dictionary, "cr4te", "crate").err().unwrap();
        assert!(matches!(err, ScoreError::InvalidTarget(WordError::InvalidCharacters)));
    }

    #[test]
    fn guess_must_be_a_word() {
        let dictionary = Dictionary::embedded();
        let err = score_guess(&dictionary, "crate", "zzzzz").err().unwrap();
        assert!(matches!(err, ScoreError::Guess(GuessError::NotAWord(_))));
        assert_eq!(err.to_string(), "failed to guess: not a valid word: 'zzzzz'");
    }

    #[test]
    fn guess_must_match_target_length() {
        let dictionary = Dictionary::embedded();
        let err = score_guess(&dictionary, "cat", "crate").err().unwrap();
        assert!(matches!(
            err,
            ScoreError::Guess(GuessError::InvalidLength {
                expected: 3,
                actual: 5
            })
        ));
    }

    #[test]
    fn very_long_target_is_rejected_by_length() {
        let dictionary = Dictionary::embedded();
        let target = "a".repeat(256);
        let err = score_guess(&dictionary, &target, "crate").err().unwrap();
        assert!(matches!(
            err,
            ScoreError::Guess(GuessError::InvalidLength {
                expected: 256,
                actual: 5
            })
        ));
    }

    #[test]
    fn first_verdict_for_starved_letter() {
        let dictionary = Dictionary::embedded();
        let result = score_guess(&dictionary, "hello", "lolly").unwrap();
        assert_eq!(result.feedback.verdicts()[3], Verdict::Incorrect);
    }
}
