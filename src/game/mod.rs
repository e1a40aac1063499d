//! Game sessions
//!
//! `Game` is the turn-based state machine: it owns the hidden target, counts
//! attempts and turns raw guess strings into `Feedback` or a `GuessError`.
//! It never prints; front ends decide how to show results.

mod error;
mod session;
mod stats;

pub use error::GuessError;
pub use session::{DEFAULT_MAX_ATTEMPTS, Game, GameConfig, GameStatus};
pub use stats::Statistics;
