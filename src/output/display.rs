//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_colored, status_strip};
use crate::commands::{BenchmarkResult, TuneReport};
use crate::core::{CharacterStatus, Word};
use crate::game::Turn;
use colored::Colorize;
use std::io::{self, Write};

pub const BANNER: &str = r"
                          ____
 _      ______  _________/ / /__
| | /| / / __ \/ ___/ __  / / _ \
| |/ |/ / /_/ / /  / /_/ / /  __/
|__/|__/\____/_/   \__,_/_/\___/
";

/// Print the game banner and the one-line rules
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_banner<W: Write>(out: &mut W, max_tries: usize) -> io::Result<()> {
    writeln!(out, "{}", BANNER.purple().bold())?;
    writeln!(out, "Guess a 5 letter word in {max_tries} tries\n")
}

/// Print the board of guesses so far plus the statistics for the latest one
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_board<W: Write>(
    out: &mut W,
    turns: &[Turn],
    status: &CharacterStatus,
) -> io::Result<()> {
    writeln!(out)?;
    for turn in turns {
        writeln!(out, "\t{}", feedback_to_colored(&turn.guess, &turn.feedback))?;
    }

    writeln!(out, "\n{}", "── Guess Statistics ──".cyan())?;
    writeln!(out, "Present Characters: {}", status_strip(status))?;
    if let Some(turn) = turns.last() {
        writeln!(out, "Similarity Score: {:.0}%", turn.similarity)?;
    }
    writeln!(out)
}

/// Print numbered suggestions
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_suggestions<W: Write>(out: &mut W, suggestions: &[Word]) -> io::Result<()> {
    writeln!(out, "Suggestions:")?;
    for (i, suggestion) in suggestions.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, suggestion.text().bright_white().bold())?;
    }
    Ok(())
}

/// Print the winning line
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_win<W: Write>(out: &mut W, tries: usize) -> io::Result<()> {
    writeln!(
        out,
        "{} Word guessed correctly in {tries} {}!",
        "[+]".green().bold(),
        if tries == 1 { "try" } else { "tries" }
    )
}

/// Print the losing line, revealing the target
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_loss<W: Write>(out: &mut W, target: &Word) -> io::Result<()> {
    writeln!(
        out,
        "{} Maximum tries reached, word was {}",
        "[-]".red().bold(),
        target.text().purple().bold()
    )
}

/// Print the result of a tuning run
pub fn print_tune_report(report: &TuneReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "TUNED PARAMETERS FOR".bright_cyan().bold(),
        report.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Population size:  {}",
        report.parameters.population_size.to_string().bright_yellow()
    );
    println!(
        "   Mutation rate:    {}",
        format!("{:.4}", report.parameters.mutation_rate).bright_yellow()
    );
    println!("   Evaluations:      {}", report.budget);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if result.total_games > 0 {
        result.games_won as f64 / result.total_games as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Games won:        {} ({})",
        result.games_won,
        format!("{win_rate:.1}%").bright_yellow().bold()
    );
    if let Some(average) = result.average_tries {
        println!("   Average tries:    {}", format!("{average:.2}").green());
    }
    println!(
        "   Mean similarity:  {:.1}%",
        result.mean_final_similarity
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.games_won == 0 {
        return;
    }

    println!("\n📈 {}", "Tries to win:".bright_cyan().bold());
    let mut tries: Vec<_> = result.distribution.iter().collect();
    tries.sort();
    for (guess_count, &count) in tries {
        let pct = count as f64 / result.games_won as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
