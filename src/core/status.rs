//! Per-letter status tracking
//!
//! Every letter starts out `Unused`. Submitting a guess classifies each of its
//! letters as `Present` or `Absent` depending on whether the target contains it.

use super::word::{ALPHABET, Word};

/// Classification of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharStatus {
    /// Letter occurs somewhere in the target
    Present,
    /// Letter does not occur in the target
    Absent,
    /// Letter has not appeared in any guess yet
    #[default]
    Unused,
}

/// Status of all 26 letters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterStatus {
    letters: [CharStatus; 26],
}

impl CharacterStatus {
    /// All letters `Unused`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a lowercase letter
    ///
    /// Bytes outside `a..=z` report `Unused`.
    #[must_use]
    pub fn get(&self, letter: u8) -> CharStatus {
        index_of(letter).map_or(CharStatus::Unused, |i| self.letters[i])
    }

    /// Overwrite the status of one letter
    ///
    /// Setting `Unused` on a letter that was already classified is ignored, the
    /// classification never goes back.
    pub fn set(&mut self, letter: u8, status: CharStatus) {
        let Some(i) = index_of(letter) else {
            return;
        };
        if status == CharStatus::Unused && self.letters[i] != CharStatus::Unused {
            return;
        }
        self.letters[i] = status;
    }

    /// Classify every letter of `guess` against `target`
    pub fn record_guess(&mut self, guess: &Word, target: &Word) {
        for &letter in guess.chars() {
            let status = if target.has_letter(letter) {
                CharStatus::Present
            } else {
                CharStatus::Absent
            };
            self.set(letter, status);
        }
    }

    /// Letters that may still be drawn (everything not marked `Absent`)
    #[must_use]
    pub fn allowed_letters(&self) -> Vec<u8> {
        self.iter()
            .filter(|(_, status)| *status != CharStatus::Absent)
            .map(|(letter, _)| letter)
            .collect()
    }

    /// Iterate `(letter, status)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, CharStatus)> + '_ {
        ALPHABET.iter().copied().zip(self.letters.iter().copied())
    }
}

fn index_of(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}
