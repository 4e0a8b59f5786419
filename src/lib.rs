//! Wordle Evolve
//!
//! A five-letter word guessing game whose suggestions come from an evolving
//! population of candidate words, with engine parameters tuned per target by
//! Bayesian optimization.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_evolve::core::{GuessRecord, Word};
//! use wordle_evolve::engine::{fitness_score, similarity_score};
//!
//! let target = Word::new("apple").unwrap();
//! let guess = Word::new("alpha").unwrap();
//!
//! // edit distance 3 over 5 letters: 1 - 3/5
//! let similarity = similarity_score("alpha", "apple").unwrap();
//! assert!((similarity - 0.4).abs() < 1e-9);
//!
//! let history = [GuessRecord::evaluate(guess, &target)];
//! println!("fitness: {}", fitness_score(&guess, &target, &history));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Evolutionary engine and parameter tuning
pub mod engine;

// Game session state
pub mod game;

// Word lists and target sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
