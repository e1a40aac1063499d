//! Command implementations

pub mod score;
pub mod simple;
pub mod verify;

pub use score::{ScoreError, ScoreResult, score_guess};
pub use simple::run_simple;
pub use verify::{VerifyReport, run_verify};
