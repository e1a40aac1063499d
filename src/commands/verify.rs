//! Verify command
//!
//! Checks a dictionary against the assumptions the game makes about its data:
//! one word length, every answer accepted as a guess, and the exact-match
//! shortcut agreeing with the full scoring pass for every answer.

use crate::core::{Feedback, Word};
use crate::dictionary::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Findings from checking a dictionary
#[derive(Debug, Default)]
pub struct VerifyReport {
    pub answers: usize,
    pub allowed: usize,
    pub word_length: usize,
    pub wrong_length: Vec<String>,
    pub missing_answers: Vec<String>,
    pub shortcut_mismatches: Vec<String>,
}

impl VerifyReport {
    /// True when no problem was found
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.wrong_length.is_empty()
            && self.missing_answers.is_empty()
            && self.shortcut_mismatches.is_empty()
    }
}

/// Check every word in the dictionary
///
/// Work is spread over the rayon pool; a progress bar is drawn when
/// `show_progress` is set.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_verify(dictionary: &Dictionary, show_progress: bool) -> VerifyReport {
    let expected = dictionary.word_length();
    let mut words: Vec<&Word> = dictionary.answers().iter().collect();
    words.extend(dictionary.allowed());

    let pb = if show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb.set_message("checking word lists");
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut wrong_length: Vec<String> = words
        .par_iter()
        .filter(|w| {
            pb.inc(1);
            w.len() != expected
        })
        .map(|w| w.text().to_string())
        .collect();
    wrong_length.sort();
    wrong_length.dedup();

    let missing_answers = dictionary
        .missing_answers()
        .into_iter()
        .map(|w| w.text().to_string())
        .collect();

    let shortcut_mismatches = dictionary
        .answers()
        .par_iter()
        .filter(|w| Feedback::calculate(w, w) != Feedback::all_correct(w))
        .map(|w| w.text().to_string())
        .collect();

    pb.finish_with_message("done");

    VerifyReport {
        answers: dictionary.answers().len(),
        allowed: dictionary.allowed_count(),
        word_length: expected,
        wrong_length,
        missing_answers,
        shortcut_mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;

    #[test]
    fn embedded_dictionary_is_clean() {
        let report = run_verify(&Dictionary::embedded(), false);

        assert!(report.is_ok(), "{report:?}");
        assert_eq!(report.word_length, 5);
        assert_eq!(report.answers, Dictionary::embedded().answers().len());
    }

    #[test]
    fn reports_answers_missing_from_allowed() {
        let dictionary = Dictionary::new(
            words_from_slice(&["crate", "slate", "trace"]),
            words_from_slice(&["crate", "react"]),
        )
        .unwrap();

        let report = run_verify(&dictionary, false);

        assert!(!report.is_ok());
        let mut missing = report.missing_answers.clone();
        missing.sort();
        assert_eq!(missing, vec!["slate", "trace"]);
        assert!(report.wrong_length.is_empty());
        assert!(report.shortcut_mismatches.is_empty());
    }
}
