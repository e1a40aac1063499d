//! Guess rejection reasons

use thiserror::Error;

/// Why a submitted guess was not accepted
///
/// None of these consume an attempt. All are recoverable: the caller reports
/// them and asks again (or starts a new game).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// No guesses left in this game
    #[error("no attempts remaining")]
    AttemptsExhausted,

    /// The target was already found
    #[error("the word has already been guessed")]
    AlreadySolved,

    /// Guess length differs from the target length
    #[error("guess length does not match word length (expected {expected}, got {actual})")]
    InvalidLength { expected: usize, actual: usize },

    /// Guess is not in the allowed-guess list
    #[error("not a valid word: '{0}'")]
    NotAWord(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            GuessError::InvalidLength {
                expected: 5,
                actual: 3
            }
            .to_string(),
            "guess length does not match word length (expected 5, got 3)"
        );
        assert_eq!(
            GuessError::NotAWord("zzzzz".to_string()).to_string(),
            "not a valid word: 'zzzzz'"
        );
        assert_eq!(GuessError::AttemptsExhausted.to_string(), "no attempts remaining");
    }
}
