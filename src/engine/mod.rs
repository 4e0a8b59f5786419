//! Evolutionary suggestion engine
//!
//! Similarity and fitness scoring, the candidate population, the evolver that
//! advances it, the ranker that turns it into suggestions, and the tuner that picks
//! the population size and mutation rate before play begins.

mod evolver;
mod fitness;
pub mod optimizer;
mod population;
mod ranker;
mod similarity;
pub mod tuner;

pub use evolver::{Evolver, evolve_population, fixed_positions};
pub use fitness::{POSITIONAL_BONUS, fitness_score, word_similarity};
pub use optimizer::{BayesianOptimizer, Dimension, OptimizeResult};
pub use population::Population;
pub use ranker::{MAX_SUGGESTIONS, suggest};
pub use similarity::{edit_distance, similarity_score};
pub use tuner::{Parameters, TunerConfig, optimize_parameters, tune};
