//! Generation-to-generation evolution
//!
//! Each generation builds every child from scratch:
//!
//! 1. Positions where the latest guess matches the target keep the guess's letter
//! 2. Every other position is drawn uniformly from the letters not marked absent
//! 3. Each position is then resampled from the full alphabet with probability
//!    `mutation_rate`, fixed positions included
//!
//! The evolver compares the guess against the real target to find the fixed
//! positions, so it works with knowledge the player does not have.

use super::population::Population;
use crate::core::{ALPHABET, CharacterStatus, WORD_LENGTH, Word};
use crate::error::{EngineError, Result};
use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Produces the next population from the current one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evolver {
    mutation_rate: f64,
}

impl Evolver {
    /// Create an evolver with a per-position mutation probability
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` unless `0.0 <= mutation_rate <= 1.0`.
    pub fn new(mutation_rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(EngineError::InvalidInput(format!(
                "mutation rate must lie in [0, 1], got {mutation_rate}"
            )));
        }
        Ok(Self { mutation_rate })
    }

    /// Build the next generation, same size as `population`
    ///
    /// `guess` is `None` when no guess has been made; no position is fixed then.
    ///
    /// # Errors
    /// Returns `EngineError::EmptyAlphabet` if every letter is marked absent.
    pub fn evolve<R: Rng + ?Sized>(
        &self,
        population: &Population,
        target: &Word,
        guess: Option<&Word>,
        status: &CharacterStatus,
        rng: &mut R,
    ) -> Result<Population> {
        let fixed = fixed_positions(target, guess);
        let allowed = status.allowed_letters();
        if allowed.is_empty() {
            return Err(EngineError::EmptyAlphabet);
        }

        trace!(
            "evolving {} candidates: fixed={fixed:?} allowed={}",
            population.len(),
            allowed.len()
        );

        let mut children = Vec::with_capacity(population.len());
        for _ in 0..population.len() {
            let child = seed_child(&fixed, &allowed, rng)?;
            children.push(self.mutate(child, rng));
        }

        Population::from_words(children)
    }

    fn mutate<R: Rng + ?Sized>(&self, word: Word, rng: &mut R) -> Word {
        let mut letters = *word.chars();
        for slot in &mut letters {
            if rng.random::<f64>() < self.mutation_rate {
                *slot = ALPHABET[rng.random_range(0..ALPHABET.len())];
            }
        }
        Word::from_letters(letters)
    }
}

fn seed_child<R: Rng + ?Sized>(
    fixed: &[Option<u8>; WORD_LENGTH],
    allowed: &[u8],
    rng: &mut R,
) -> Result<Word> {
    let mut letters = [0u8; WORD_LENGTH];
    for (slot, fixed_letter) in letters.iter_mut().zip(fixed) {
        *slot = match fixed_letter {
            Some(letter) => *letter,
            None => *allowed.choose(rng).ok_or(EngineError::EmptyAlphabet)?,
        };
    }
    Ok(Word::from_letters(letters))
}

/// Letters to carry over, by position: `Some` where guess and target agree
#[must_use]
pub fn fixed_positions(target: &Word, guess: Option<&Word>) -> [Option<u8>; WORD_LENGTH] {
    let mut fixed = [None; WORD_LENGTH];
    if let Some(guess) = guess {
        for i in guess.matching_positions(target) {
            fixed[i] = Some(guess.char_at(i));
        }
    }
    fixed
}

/// Advance `population` by one generation
///
/// Convenience wrapper over [`Evolver`].
///
/// # Errors
/// Returns `EngineError::InvalidInput` for an out-of-range mutation rate, or
/// `EngineError::EmptyAlphabet` if every letter is marked absent.
pub fn evolve_population<R: Rng + ?Sized>(
    population: &Population,
    target: &Word,
    guess: Option<&Word>,
    mutation_rate: f64,
    status: &CharacterStatus,
    rng: &mut R,
) -> Result<Population> {
    Evolver::new(mutation_rate)?.evolve(population, target, guess, status, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CharStatus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn fixed_positions_from_matching_letters() {
        let fixed = fixed_positions(&word("apple"), Some(&word("alpha")));
        assert_eq!(fixed, [Some(b'a'), None, Some(b'p'), None, None]);
    }

    #[test]
    fn no_guess_fixes_nothing() {
        assert_eq!(fixed_positions(&word("apple"), None), [None; WORD_LENGTH]);
    }

    #[test]
    fn apple_alpha_scenario() {
        let mut rng = StdRng::seed_from_u64(11);
        let target = word("apple");
        let guess = word("alpha");
        let mut status = CharacterStatus::new();
        status.record_guess(&guess, &target);

        let population = Population::generate(4, &mut rng).unwrap();
        let next =
            evolve_population(&population, &target, Some(&guess), 0.0, &status, &mut rng).unwrap();

        assert_eq!(next.len(), 4);
        for child in &next {
            assert_eq!(child.char_at(0), b'a');
            assert_eq!(child.char_at(2), b'p');
            for i in [1, 3, 4] {
                assert_ne!(status.get(child.char_at(i)), CharStatus::Absent);
                assert_ne!(child.char_at(i), b'h');
            }
        }
    }

    #[test]
    fn evolve_preserves_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let target = word("crane");
        let status = CharacterStatus::new();
        let evolver = Evolver::new(0.05).unwrap();

        for size in [1, 7, 50, 200] {
            let population = Population::generate(size, &mut rng).unwrap();
            let next = evolver
                .evolve(&population, &target, Some(&word("slate")), &status, &mut rng)
                .unwrap();
            assert_eq!(next.len(), size);
        }
    }

    #[test]
    fn full_mutation_can_overwrite_fixed_letters() {
        let mut rng = StdRng::seed_from_u64(21);
        let target = word("apple");
        let status = CharacterStatus::new();
        let population = Population::generate(200, &mut rng).unwrap();

        let next =
            evolve_population(&population, &target, Some(&target), 1.0, &status, &mut rng).unwrap();

        assert!(next.iter().any(|child| child != &target));
    }

    #[test]
    fn mutation_draws_from_absent_letters_too() {
        let mut rng = StdRng::seed_from_u64(33);
        let mut status = CharacterStatus::new();
        for &letter in &ALPHABET[..24] {
            status.set(letter, CharStatus::Absent);
        }
        let population = Population::generate(50, &mut rng).unwrap();

        let next =
            evolve_population(&population, &word("yyyyy"), None, 1.0, &status, &mut rng).unwrap();

        assert!(next.iter().any(|child| {
            child
                .chars()
                .iter()
                .any(|&letter| status.get(letter) == CharStatus::Absent)
        }));
    }

    #[test]
    fn zero_mutation_draws_only_allowed_letters() {
        let mut rng = StdRng::seed_from_u64(33);
        let mut status = CharacterStatus::new();
        for &letter in &ALPHABET[..24] {
            status.set(letter, CharStatus::Absent);
        }
        let population = Population::generate(50, &mut rng).unwrap();

        let next =
            evolve_population(&population, &word("yyyyy"), None, 0.0, &status, &mut rng).unwrap();

        for child in &next {
            assert!(child.chars().iter().all(|&letter| letter == b'y' || letter == b'z'));
        }
    }

    #[test]
    fn zero_mutation_keeps_all_fixed_letters() {
        let mut rng = StdRng::seed_from_u64(21);
        let target = word("apple");
        let status = CharacterStatus::new();
        let population = Population::generate(30, &mut rng).unwrap();

        let next =
            evolve_population(&population, &target, Some(&target), 0.0, &status, &mut rng).unwrap();

        assert!(next.iter().all(|child| child == &target));
    }

    #[test]
    fn all_absent_is_empty_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut status = CharacterStatus::new();
        for letter in ALPHABET {
            status.set(letter, CharStatus::Absent);
        }
        let population = Population::generate(3, &mut rng).unwrap();

        let result = evolve_population(&population, &word("apple"), None, 0.0, &status, &mut rng);
        assert_eq!(result, Err(EngineError::EmptyAlphabet));
    }

    #[test]
    fn mutation_rate_must_be_a_probability() {
        assert!(Evolver::new(-0.1).is_err());
        assert!(Evolver::new(1.5).is_err());
        assert!(Evolver::new(f64::NAN).is_err());
        assert!(Evolver::new(0.05).is_ok());
    }

    #[test]
    fn evolution_is_reproducible() {
        let target = word("apple");
        let status = CharacterStatus::new();
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let population = Population::generate(25, &mut rng).unwrap();
            evolve_population(&population, &target, None, 0.1, &status, &mut rng).unwrap()
        };
        assert_eq!(run(99), run(99));
    }
}
