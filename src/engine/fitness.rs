//! Fitness model
//!
//! `fitness = (similarity + 0.5 * positional_matches) * feedback_sum(history)`
//!
//! The history multiplier means an empty history (or one whose signals cancel out)
//! scores every candidate as zero. Rankings made before the first guess are therefore
//! indifferent between candidates.

use super::similarity::edit_distance;
use crate::core::{GuessRecord, WORD_LENGTH, Word, feedback_sum};

/// Bonus awarded per letter in its correct position
pub const POSITIONAL_BONUS: f64 = 0.5;

/// Similarity of two words, infallible because both have length 5
#[must_use]
pub fn word_similarity(a: &Word, b: &Word) -> f64 {
    1.0 - edit_distance(a.chars().as_slice(), b.chars().as_slice()) as f64 / WORD_LENGTH as f64
}

/// Score a candidate against the target and the feedback history so far
///
/// # Examples
/// ```
/// use wordle_evolve::core::{GuessRecord, Signal, Word};
/// use wordle_evolve::engine::fitness_score;
///
/// let target = Word::new("apple").unwrap();
/// let history = [GuessRecord::new(Word::new("alpha").unwrap(), Signal::Closer)];
///
/// // (1.0 + 0.5 * 5) * 1
/// assert!((fitness_score(&target, &target, &history) - 3.5).abs() < 1e-12);
/// assert_eq!(fitness_score(&target, &target, &[]), 0.0);
/// ```
#[must_use]
pub fn fitness_score(guess: &Word, target: &Word, history: &[GuessRecord]) -> f64 {
    let similarity = word_similarity(guess, target);
    let bonus = POSITIONAL_BONUS * guess.positional_matches(target) as f64;
    (similarity + bonus) * f64::from(feedback_sum(history))
}
