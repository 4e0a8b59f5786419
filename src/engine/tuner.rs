//! Hyperparameter tuning
//!
//! Picks the population size and mutation rate by minimizing a simulated
//! objective with [`BayesianOptimizer`].
//!
//! The objective evolves a fresh population for a fixed number of rounds with no
//! guess and then scores the first member with an empty history. An empty history
//! makes every fitness zero, so every candidate scores the same and the chosen
//! parameters are whatever the optimizer's exploration visits first.

use super::evolver::Evolver;
use super::fitness::fitness_score;
use super::optimizer::{BayesianOptimizer, Dimension};
use super::population::Population;
use crate::core::{CharacterStatus, Word};
use crate::error::{EngineError, Result};
use log::{debug, info};
use rand::Rng;

/// Smallest population size considered
pub const MIN_POPULATION: usize = 50;
/// Largest population size considered
pub const MAX_POPULATION: usize = 200;
/// Smallest mutation rate considered
pub const MIN_MUTATION_RATE: f64 = 0.01;
/// Largest mutation rate considered
pub const MAX_MUTATION_RATE: f64 = 0.1;
/// Default number of objective evaluations
pub const DEFAULT_BUDGET: usize = 10;
/// Simulated generations per objective evaluation
pub const SIMULATED_ROUNDS: usize = 10;

/// Engine parameters chosen before play begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub population_size: usize,
    pub mutation_rate: f64,
}

/// Tuner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TunerConfig {
    /// Objective evaluations
    pub budget: usize,
    /// Random evaluations before the surrogate takes over
    pub initial_points: usize,
    /// Evolution rounds simulated per evaluation
    pub rounds: usize,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            initial_points: 5,
            rounds: SIMULATED_ROUNDS,
        }
    }
}

/// Search space: integer population size, real mutation rate
#[must_use]
pub fn search_space() -> Vec<Dimension> {
    vec![
        Dimension::Integer {
            low: MIN_POPULATION as i64,
            high: MAX_POPULATION as i64,
        },
        Dimension::Real {
            low: MIN_MUTATION_RATE,
            high: MAX_MUTATION_RATE,
        },
    ]
}

/// Objective value for one parameter candidate (lower is better)
///
/// # Errors
/// Propagates population and evolution errors, e.g. `EngineError::EmptyAlphabet`.
pub fn objective<R: Rng + ?Sized>(
    parameters: Parameters,
    target: &Word,
    status: &CharacterStatus,
    rounds: usize,
    rng: &mut R,
) -> Result<f64> {
    let evolver = Evolver::new(parameters.mutation_rate)?;
    let mut population = Population::generate(parameters.population_size, rng)?;
    for _ in 0..rounds {
        population = evolver.evolve(&population, target, None, status, rng)?;
    }

    let leader = population.first().ok_or_else(|| {
        EngineError::InvalidInput("population evolved into nothing".to_string())
    })?;
    Ok(-fitness_score(leader, target, &[]))
}

/// Choose population size and mutation rate for `target`
///
/// # Errors
/// Returns `EngineError::OptimizerFailure` if the search yields no result, and
/// propagates errors raised while simulating (such as `EmptyAlphabet`).
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_evolve::core::{CharacterStatus, Word};
/// use wordle_evolve::engine::optimize_parameters;
///
/// let mut rng = StdRng::seed_from_u64(10);
/// let target = Word::new("apple").unwrap();
/// let params = optimize_parameters(&target, &CharacterStatus::new(), &mut rng).unwrap();
/// assert!((50..=200).contains(&params.population_size));
/// assert!((0.01..=0.1).contains(&params.mutation_rate));
/// ```
pub fn optimize_parameters<R: Rng + ?Sized>(
    target: &Word,
    status: &CharacterStatus,
    rng: &mut R,
) -> Result<Parameters> {
    tune(target, status, TunerConfig::default(), rng)
}

/// [`optimize_parameters`] with an explicit configuration
///
/// # Errors
/// See [`optimize_parameters`].
pub fn tune<R: Rng + ?Sized>(
    target: &Word,
    status: &CharacterStatus,
    config: TunerConfig,
    rng: &mut R,
) -> Result<Parameters> {
    let optimizer = BayesianOptimizer::new(search_space(), config.budget)
        .with_initial_points(config.initial_points);

    let result = optimizer.minimize(
        |x, rng| {
            let parameters = parameters_from_point(x)?;
            let value = objective(parameters, target, status, config.rounds, rng)?;
            debug!(
                "candidate size={} rate={:.4} -> {value}",
                parameters.population_size, parameters.mutation_rate
            );
            Ok(value)
        },
        rng,
    )?;

    let parameters = parameters_from_point(&result.x)?;
    info!(
        "tuned parameters: population size {}, mutation rate {:.4} (objective {})",
        parameters.population_size, parameters.mutation_rate, result.fun
    );
    Ok(parameters)
}

fn parameters_from_point(x: &[f64]) -> Result<Parameters> {
    match *x {
        [size, rate] => Ok(Parameters {
            population_size: size.round() as usize,
            mutation_rate: rate,
        }),
        _ => Err(EngineError::OptimizerFailure(format!(
            "expected a 2-dimensional point, got {}",
            x.len()
        ))),
    }
}
