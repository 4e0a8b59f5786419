//! Benchmark command
//!
//! Plays complete games where every guess is the engine's top suggestion.

use crate::game::{Game, GameConfig, GameState, GuessOutcome};
use crate::wordlists::{WordSource, pick_target};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub games_won: usize,
    /// Average tries over won games, `None` if nothing was won
    pub average_tries: Option<f64>,
    /// Tries needed, keyed by try count, for won games
    pub distribution: HashMap<usize, usize>,
    /// Similarity of the last guess to the target in lost games, averaged
    pub mean_final_similarity: f64,
    pub duration: Duration,
}

/// Play `games` automated games
///
/// Targets come from `source`. The first guess of each game is the top
/// suggestion of the freshly seeded population.
///
/// # Errors
///
/// Returns an error if a game cannot be set up or played.
pub fn run_benchmark<S: WordSource, R: Rng + ?Sized>(
    games: usize,
    source: &S,
    config: GameConfig,
    show_progress: bool,
    rng: &mut R,
) -> Result<BenchmarkResult> {
    let start = Instant::now();
    let pb = if show_progress {
        let pb = ProgressBar::new(games as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .context("invalid progress bar template")?
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut games_won = 0;
    let mut total_tries = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut lost_similarity = Vec::new();

    for _ in 0..games {
        let target = pick_target(source, rng);
        let mut game = Game::new(target, config, rng)
            .with_context(|| format!("failed to start game for target {target}"))?;

        while !game.is_over() {
            let guess = game
                .suggestions()
                .first()
                .copied()
                .context("population produced no suggestions")?;
            if let GuessOutcome::Solved { tries } = game.submit_guess(guess, rng)? {
                games_won += 1;
                total_tries += tries;
                *distribution.entry(tries).or_insert(0) += 1;
            }
        }

        if game.state() == GameState::Lost
            && let Some(turn) = game.turns().last()
        {
            lost_similarity.push(turn.similarity);
        }

        pb.inc(1);
        pb.set_message(format!("{games_won} won"));
    }
    pb.finish_with_message(format!("{games_won}/{games} won"));

    let mean_final_similarity = if lost_similarity.is_empty() {
        0.0
    } else {
        lost_similarity.iter().sum::<f64>() / lost_similarity.len() as f64
    };

    Ok(BenchmarkResult {
        total_games: games,
        games_won,
        average_tries: (games_won > 0).then(|| total_tries as f64 / games_won as f64),
        distribution,
        mean_final_similarity,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::TunerConfig;
    use crate::wordlists::ListSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_config() -> GameConfig {
        GameConfig {
            max_tries: 10,
            tuner: TunerConfig {
                budget: 3,
                initial_points: 3,
                rounds: 2,
            },
        }
    }

    #[test]
    fn benchmark_runs() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = ListSource::new("test", vec![Word::new("apple").unwrap()]);
        let result = run_benchmark(3, &source, small_config(), false, &mut rng).unwrap();

        assert_eq!(result.total_games, 3);
        assert!(result.games_won <= 3);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.games_won);
        for &tries in result.distribution.keys() {
            assert!((1..=10).contains(&tries));
        }
    }

    #[test]
    fn benchmark_zero_games() {
        let mut rng = StdRng::seed_from_u64(2);
        let source = ListSource::embedded();
        let result = run_benchmark(0, &source, small_config(), false, &mut rng).unwrap();
        assert_eq!(result.total_games, 0);
        assert_eq!(result.games_won, 0);
        assert!(result.average_tries.is_none());
    }
}
