//! Candidate population

use crate::core::Word;
use crate::error::{EngineError, Result};
use rand::Rng;

/// Fixed-size ordered collection of candidate words
///
/// The size is chosen once and never changes; each generation replaces the
/// whole population with a new one of the same size. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    words: Vec<Word>,
}

impl Population {
    /// Generate `size` words uniformly at random
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` if `size` is zero.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_evolve::engine::Population;
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let population = Population::generate(50, &mut rng).unwrap();
    /// assert_eq!(population.len(), 50);
    /// ```
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(EngineError::InvalidInput(
                "population size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            words: (0..size).map(|_| Word::random(rng)).collect(),
        })
    }

    /// Wrap an existing set of words
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` if `words` is empty.
    pub fn from_words(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(EngineError::InvalidInput(
                "population must contain at least one word".to_string(),
            ));
        }
        Ok(Self { words })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false, a population holds at least one word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// First member in population order
    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
