//! Game session
//!
//! Owns everything that changes over one game: the target, the per-letter status,
//! the guess history and the candidate population. Front ends (the TUI, the simple
//! CLI and the benchmark) drive a `Game` and render what it returns.

use crate::core::{
    CharacterStatus, GuessRecord, LetterFeedback, Signal, WORD_LENGTH, Word, letter_feedback,
};
use crate::engine::{Evolver, Parameters, Population, TunerConfig, suggest, tune, word_similarity};
use crate::error::{EngineError, Result};
use log::{debug, info};
use rand::Rng;

/// Default number of guesses per game
pub const DEFAULT_MAX_TRIES: usize = 10;

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_tries: usize,
    pub tuner: TunerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
            tuner: TunerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Everything the player learns from one non-winning guess
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: [LetterFeedback; WORD_LENGTH],
    /// Similarity to the target as a percentage
    pub similarity: f64,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    /// The guess was the target
    Solved { tries: usize },
    /// The guess was scored; check [`Game::state`] for a loss
    Scored(Turn),
}

/// One game against a hidden target
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    status: CharacterStatus,
    history: Vec<GuessRecord>,
    turns: Vec<Turn>,
    population: Population,
    evolver: Evolver,
    parameters: Parameters,
    max_tries: usize,
    tries: usize,
    state: GameState,
}

impl Game {
    /// Start a game: tune the engine for `target`, then seed the population
    ///
    /// # Errors
    /// Propagates tuner failures (`OptimizerFailure`) and invalid configuration.
    pub fn new<R: Rng + ?Sized>(target: Word, config: GameConfig, rng: &mut R) -> Result<Self> {
        let status = CharacterStatus::new();
        let parameters = tune(&target, &status, config.tuner, rng)?;
        Self::with_parameters(target, parameters, config.max_tries, rng)
    }

    /// Start a game with fixed engine parameters, skipping the tuner
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` for a zero try limit, an empty
    /// population or an out-of-range mutation rate.
    pub fn with_parameters<R: Rng + ?Sized>(
        target: Word,
        parameters: Parameters,
        max_tries: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if max_tries == 0 {
            return Err(EngineError::InvalidInput(
                "a game needs at least one try".to_string(),
            ));
        }
        let evolver = Evolver::new(parameters.mutation_rate)?;
        let population = Population::generate(parameters.population_size, rng)?;
        info!(
            "new game: {} tries, population {}, mutation rate {:.4}",
            max_tries, parameters.population_size, parameters.mutation_rate
        );

        Ok(Self {
            target,
            status: CharacterStatus::new(),
            history: Vec::new(),
            turns: Vec::new(),
            population,
            evolver,
            parameters,
            max_tries,
            tries: 0,
            state: GameState::InProgress,
        })
    }

    /// Submit a guess
    ///
    /// A winning guess ends the game immediately. Any other guess updates the
    /// letter status, is appended to the history, and advances the population.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` once the game is over, and propagates
    /// evolution errors.
    pub fn submit_guess<R: Rng + ?Sized>(
        &mut self,
        guess: Word,
        rng: &mut R,
    ) -> Result<GuessOutcome> {
        if self.state != GameState::InProgress {
            return Err(EngineError::InvalidInput("the game is already over".to_string()));
        }
        self.tries += 1;

        if guess == self.target {
            self.state = GameState::Won;
            info!("solved in {} tries", self.tries);
            return Ok(GuessOutcome::Solved { tries: self.tries });
        }

        self.status.record_guess(&guess, &self.target);
        let record = GuessRecord::evaluate(guess, &self.target);
        let turn = Turn {
            guess,
            feedback: letter_feedback(&guess, &self.target),
            similarity: word_similarity(&guess, &self.target) * 100.0,
            signal: record.signal,
        };
        self.history.push(record);
        self.turns.push(turn.clone());

        self.population =
            self.evolver
                .evolve(&self.population, &self.target, Some(&guess), &self.status, rng)?;
        debug!(
            "try {}/{}: {guess} {:?}, similarity {:.0}%",
            self.tries, self.max_tries, turn.signal, turn.similarity
        );

        if self.tries >= self.max_tries {
            self.state = GameState::Lost;
            info!("out of tries, target was {}", self.target);
        }
        Ok(GuessOutcome::Scored(turn))
    }

    /// Up to five distinct candidates, best first
    #[must_use]
    pub fn suggestions(&self) -> Vec<Word> {
        suggest(&self.population, &self.target, &self.history)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, GameState::InProgress)
    }

    /// The hidden target
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn status(&self) -> &CharacterStatus {
        &self.status
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn population(&self) -> &Population {
        &self.population
    }

    #[must_use]
    pub const fn parameters(&self) -> Parameters {
        self.parameters
    }

    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    #[must_use]
    pub const fn tries_left(&self) -> usize {
        self.max_tries.saturating_sub(self.tries)
    }
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

    fn quick_game(target: &str, max_tries: usize, rng: &mut StdRng) -> Game {
        let parameters = Parameters {
            population_size: 50,
            mutation_rate: 0.05,
        };
        Game::with_parameters(word(target), parameters, max_tries, rng).unwrap()
    }

    #[test]
    fn new_game_tunes_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = Game::new(word("apple"), GameConfig::default(), &mut rng).unwrap();
        let params = game.parameters();
        assert!((50..=200).contains(&params.population_size));
        assert_eq!(game.population().len(), params.population_size);
        assert_eq!(game.state(), GameState::InProgress);
    }

    #[test]
    fn winning_guess_ends_game_without_recording() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = quick_game("apple", 10, &mut rng);

        let outcome = game.submit_guess(word("apple"), &mut rng).unwrap();
        assert_eq!(outcome, GuessOutcome::Solved { tries: 1 });
        assert_eq!(game.state(), GameState::Won);
        assert!(game.history().is_empty());
        assert_eq!(game.status().get(b'a'), CharStatus::Unused);
    }

    #[test]
    fn scored_guess_updates_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = quick_game("apple", 10, &mut rng);

        let GuessOutcome::Scored(turn) = game.submit_guess(word("alpha"), &mut rng).unwrap() else {
            panic!("expected a scored guess");
        };
        assert_eq!(turn.signal, Signal::Closer);
        assert_eq!(turn.feedback[0], LetterFeedback::Correct);
        assert!((turn.similarity - 40.0).abs() < 1e-9);

        assert_eq!(game.history().len(), 1);
        assert_eq!(game.status().get(b'h'), CharStatus::Absent);
        assert_eq!(game.population().len(), 50);
    }

    #[test]
    fn running_out_of_tries_loses() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = quick_game("apple", 2, &mut rng);

        game.submit_guess(word("crane"), &mut rng).unwrap();
        assert_eq!(game.tries_left(), 1);
        game.submit_guess(word("mount"), &mut rng).unwrap();
        assert_eq!(game.state(), GameState::Lost);
        assert!(game.submit_guess(word("apple"), &mut rng).is_err());
    }

    #[test]
    fn suggestions_are_distinct_and_bounded() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = quick_game("apple", 10, &mut rng);
        game.submit_guess(word("alpha"), &mut rng).unwrap();

        let suggestions = game.suggestions();
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 5);
        for (i, a) in suggestions.iter().enumerate() {
            assert!(suggestions[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn zero_tries_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        let parameters = Parameters {
            population_size: 50,
            mutation_rate: 0.05,
        };
        assert!(Game::with_parameters(word("apple"), parameters, 0, &mut rng).is_err());
    }
}
