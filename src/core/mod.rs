//! Core domain types for the game
//!
//! Words, letter counts and the scoring algorithm. Nothing here does I/O;
//! every type is pure and cheap to test.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, Verdict};
pub use letters::LetterCounts;
pub use word::{Word, WordError};
