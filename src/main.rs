//! Wordle Evolve - CLI
//!
//! Word guessing game with TUI and CLI modes, driven by an evolving population
//! of candidate words.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_evolve::{
    commands::{run_benchmark, run_simple, run_tune},
    engine::TunerConfig,
    game::{DEFAULT_MAX_TRIES, Game, GameConfig},
    output::{print_benchmark_result, print_tune_report},
    wordlists::{SourceType, WordSource, pick_target},
};

#[derive(Parser)]
#[command(
    name = "wordle_evolve",
    about = "Word guessing game with evolutionary suggestions and Bayesian-tuned parameters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the random number generator (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Maximum number of guesses per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_TRIES)]
    tries: usize,

    /// Target source: 'embedded' (default), 'random', or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Objective evaluations per parameter search
    #[arg(short, long, global = true, default_value_t = TunerConfig::default().budget)]
    budget: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Tune engine parameters for a specific target word
    Tune {
        /// The target word to tune for
        target: String,
    },

    /// Play automated games using the top suggestion every turn
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            max_tries: self.tries,
            tuner: TunerConfig {
                budget: self.budget,
                ..TunerConfig::default()
            },
        }
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.game_config();
    let mut rng = cli.rng();
    let source = SourceType::from_name(&cli.wordlist);
    info!("target source: {}", source.describe());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(source, config, rng),
        Commands::Simple => {
            let target = pick_target(&source, &mut rng);
            let game = Game::new(target, config, &mut rng)?;
            run_simple(game, &mut rng)
        }
        Commands::Tune { target } => {
            let report = run_tune(&target, config.tuner, &mut rng)?;
            print_tune_report(&report);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} games...");
            let result = run_benchmark(count, &source, config, true, &mut rng)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(source: SourceType, config: GameConfig, mut rng: StdRng) -> Result<()> {
    use wordle_evolve::interactive::{App, run_tui};

    let target = pick_target(&source, &mut rng);
    let game = Game::new(target, config, &mut rng)?;
    run_tui(App::new(game, source, config, rng))
}
