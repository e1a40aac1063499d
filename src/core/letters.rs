//! Letter frequency multiset
//!
//! Counts how many times each letter occurs in a target word. A letter whose
//! count drops to zero is removed immediately, so "absent" and "used up" are
//! the same state for every lookup.

use rustc_hash::FxHashMap;

/// Multiset of letters with delete-on-zero semantics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(FxHashMap<char, usize>);

impl LetterCounts {
    /// Count the given letters
    #[must_use]
    pub fn from_letters(letters: &[char]) -> Self {
        let mut counts = FxHashMap::default();
        for &letter in letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Consume one occurrence of `letter`
    ///
    /// Returns `false` without changing anything if the letter is not available.
    pub fn take(&mut self, letter: char) -> bool {
        let Some(count) = self.0.get_mut(&letter) else {
            return false;
        };

        *count -= 1;
        if *count == 0 {
            self.0.remove(&letter);
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn get(&self, letter: char) -> usize {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn total(&self) -> usize {
        self.0.values().sum()
    }
}
