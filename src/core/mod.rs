//! Core domain types for the word game
//!
//! Words, per-letter status, and guess feedback. Pure types with no I/O.

mod feedback;
mod status;
mod word;

pub use feedback::{GuessRecord, LetterFeedback, Signal, feedback_sum, letter_feedback};
pub use status::{CharStatus, CharacterStatus};
pub use word::{ALPHABET, WORD_LENGTH, Word};
