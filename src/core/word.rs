//! Five-letter word representation
//!
//! A Word stores exactly five lowercase ASCII letters. Anything else is rejected at
//! construction, so the rest of the engine can rely on the length invariant.

use crate::error::{EngineError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// The 26-letter alphabet words are drawn from
pub const ALPHABET: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// A 5-letter lowercase word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` if the text is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_evolve::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref().to_lowercase();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(EngineError::InvalidInput(format!(
                "word must be exactly {WORD_LENGTH} letters, got {length}"
            )));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(EngineError::InvalidInput(format!(
                "word '{text}' must contain only letters a-z"
            )));
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());
        Ok(Self { chars })
    }

    /// Build a word from letters already known to be lowercase ASCII
    pub(crate) const fn from_letters(chars: [u8; WORD_LENGTH]) -> Self {
        Self { chars }
    }

    /// Draw a word uniformly at random from the full alphabet
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut chars = [0u8; WORD_LENGTH];
        for slot in &mut chars {
            *slot = ALPHABET[rng.random_range(0..ALPHABET.len())];
        }
        Self { chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction only admits ASCII letters
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Indices where both words carry the same letter
    #[must_use]
    pub fn matching_positions(&self, other: &Self) -> Vec<usize> {
        (0..WORD_LENGTH)
            .filter(|&i| self.chars[i] == other.chars[i])
            .collect()
    }

    /// Number of indices where both words carry the same letter
    #[must_use]
    pub fn positional_matches(&self, other: &Self) -> usize {
        self.chars
            .iter()
            .zip(other.chars.iter())
            .filter(|(a, b)| a == b)
            .count()
    }
}

impl FromStr for Word {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(Word::new("shrt").is_err());
        assert!(Word::new("").is_err());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
        assert!(Word::new("crané").is_err()); // Non-ASCII
    }

    #[test]
    fn accented_word_reports_letter_problem() {
        // Five characters but six bytes
        let Err(EngineError::InvalidInput(message)) = Word::new("crané") else {
            panic!("expected invalid input");
        };
        assert!(message.contains("only letters a-z"), "{message}");

        let Err(EngineError::InvalidInput(message)) = Word::new("cranés") else {
            panic!("expected invalid input");
        };
        assert!(message.contains("got 6"), "{message}");
    }

    #[test]
    fn word_parse() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(word.char_at(0), b's');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn positional_matches_counts_same_index_letters() {
        let apple = Word::new("apple").unwrap();
        let alpha = Word::new("alpha").unwrap();
        // 'a' at 0 and 'p' at 2
        assert_eq!(apple.positional_matches(&alpha), 2);
        assert_eq!(apple.matching_positions(&alpha), vec![0, 2]);
        assert_eq!(apple.positional_matches(&apple), WORD_LENGTH);
    }

    #[test]
    fn random_words_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let word = Word::random(&mut rng);
            assert!(Word::new(word.text()).is_ok());
        }
    }

    #[test]
    fn random_words_reproducible_with_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(Word::random(&mut a), Word::random(&mut b));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
