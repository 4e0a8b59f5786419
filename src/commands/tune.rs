//! Tune command
//!
//! Runs the hyperparameter search for a given target and reports the result.

use crate::core::{CharacterStatus, Word};
use crate::engine::{Parameters, TunerConfig, tune};
use crate::error::Result;
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of a tuning run
pub struct TuneReport {
    pub target: Word,
    pub parameters: Parameters,
    pub budget: usize,
    pub duration: Duration,
}

/// Tune engine parameters for `target` with every letter still unused
///
/// # Errors
///
/// Returns an error if the target is not a five-letter word or the search fails.
pub fn run_tune<R: Rng + ?Sized>(
    target: &str,
    config: TunerConfig,
    rng: &mut R,
) -> Result<TuneReport> {
    let target = Word::new(target)?;
    let start = Instant::now();
    let parameters = tune(&target, &CharacterStatus::new(), config, rng)?;

    Ok(TuneReport {
        target,
        parameters,
        budget: config.budget,
        duration: start.elapsed(),
    })
}
