//! OpenWordle
//!
//! A terminal word-guessing game. A hidden word is drawn from a dictionary and
//! every guess is scored letter by letter with a single left-to-right pass.
//!
//! # Quick Start
//!
//! ```rust
//! use openwordle::dictionary::Dictionary;
//! use openwordle::game::Game;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let dictionary = Dictionary::embedded();
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = Game::new(&dictionary, &mut rng);
//!
//! match game.submit_guess("crate") {
//!     Ok(feedback) => println!("{feedback} {}", feedback.to_emoji()),
//!     Err(e) => println!("failed to guess: {e}"),
//! }
//! println!("{} attempts left", game.remaining_attempts());
//! ```

// Core domain types
pub mod core;

// Answer and guess word lists
pub mod dictionary;

// Game sessions and turn tracking
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
