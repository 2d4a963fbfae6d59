//! Wordle Game
//!
//! A terminal Wordle: guess a hidden five-letter word in six tries, with three
//! difficulty tiers, tiered word validation and persistent win/loss statistics.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::core::{Difficulty, Word, score};
//! use wordle_game::game::Game;
//! use wordle_game::stats::{MemoryStore, StatsStore};
//! use wordle_game::validation::Validator;
//! use wordle_game::wordlists::WordCatalog;
//!
//! // Score a single guess
//! let feedback = score(&Word::new("crane").unwrap(), &Word::new("nacre").unwrap());
//! println!("{feedback}");
//!
//! // Play a round
//! let catalog = WordCatalog::embedded();
//! let validator = Validator::offline(&catalog);
//! let mut game = Game::new(&catalog, Difficulty::Easy, StatsStore::load(MemoryStore::new()));
//! for ch in "about".chars() {
//!     game.append_letter(ch);
//! }
//! let submission = game.submit_guess(&validator).unwrap();
//! println!("{} {}", submission.guess, submission.feedback);
//! ```

// Core domain types
pub mod core;

// Word lists and the secret/dictionary catalog
pub mod wordlists;

// Guess validity pipeline
pub mod validation;

// Persistent statistics
pub mod stats;

// Round and game state machine
pub mod game;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
