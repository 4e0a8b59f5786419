//! Guess feedback
//!
//! Two kinds of feedback come out of a guess: the coarse directional `Signal`
//! recorded in the history, and the per-letter `LetterFeedback` shown to the player.

use super::word::{WORD_LENGTH, Word};

/// Directional signal attached to a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// At least one letter sits in its correct position
    Closer,
    /// No letter sits in its correct position
    Farther,
}

impl Signal {
    /// Signal for `guess` against `target`
    #[must_use]
    pub fn from_guess(guess: &Word, target: &Word) -> Self {
        if guess.positional_matches(target) > 0 {
            Self::Closer
        } else {
            Self::Farther
        }
    }

    /// Contribution of this signal to the feedback sum
    #[must_use]
    pub const fn weight(self) -> i32 {
        match self {
            Self::Closer => 1,
            Self::Farther => -1,
        }
    }
}

/// A submitted guess together with its directional signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub signal: Signal,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(word: Word, signal: Signal) -> Self {
        Self { word, signal }
    }

    /// Record `guess` with the signal it earns against `target`
    #[must_use]
    pub fn evaluate(guess: Word, target: &Word) -> Self {
        Self::new(guess, Signal::from_guess(&guess, target))
    }
}

/// +1 per `Closer`, -1 per `Farther`
///
/// An empty history sums to zero.
#[must_use]
pub fn feedback_sum(history: &[GuessRecord]) -> i32 {
    history.iter().map(|record| record.signal.weight()).sum()
}

/// Per-letter feedback for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// Right letter, right place
    Correct,
    /// Letter occurs elsewhere in the target
    Misplaced,
    /// Letter does not occur in the target
    Missing,
}

/// Per-letter feedback of `guess` against `target`
///
/// Duplicate letters are not counted down: every occurrence of a letter that the
/// target contains is reported as at least `Misplaced`.
#[must_use]
pub fn letter_feedback(guess: &Word, target: &Word) -> [LetterFeedback; WORD_LENGTH] {
    let mut result = [LetterFeedback::Missing; WORD_LENGTH];
    for (i, slot) in result.iter_mut().enumerate() {
        let letter = guess.char_at(i);
        *slot = if letter == target.char_at(i) {
            LetterFeedback::Correct
        } else if target.has_letter(letter) {
            LetterFeedback::Misplaced
        } else {
            LetterFeedback::Missing
        };
    }
    result
}
