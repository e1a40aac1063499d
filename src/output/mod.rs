//! Terminal output formatting
//!
//! Colored rendering for the text-mode game and the one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_score_result, print_verify_report, write_banner, write_feedback, write_statistics,
};
