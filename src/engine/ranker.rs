//! Suggestion ranking

use super::fitness::fitness_score;
use super::population::Population;
use crate::core::{GuessRecord, Word};
use rustc_hash::FxHashSet;

/// Maximum number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 5;

/// Top distinct candidates by fitness, best first
///
/// The sort is stable, so candidates with equal fitness keep their population
/// order. With an empty history every candidate scores zero and the result is
/// simply the first distinct words of the population.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_evolve::core::Word;
/// use wordle_evolve::engine::{Population, suggest};
///
/// let mut rng = StdRng::seed_from_u64(4);
/// let population = Population::generate(100, &mut rng).unwrap();
/// let target = Word::new("apple").unwrap();
///
/// let suggestions = suggest(&population, &target, &[]);
/// assert!(suggestions.len() <= 5);
/// ```
#[must_use]
pub fn suggest(population: &Population, target: &Word, history: &[GuessRecord]) -> Vec<Word> {
    let mut scored: Vec<(f64, &Word)> = population
        .iter()
        .map(|word| (fitness_score(word, target, history), word))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut seen = FxHashSet::default();
    scored
        .into_iter()
        .filter(|(_, word)| seen.insert(**word))
        .map(|(_, word)| *word)
        .take(MAX_SUGGESTIONS)
        .collect()
}
