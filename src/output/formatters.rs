//! Formatting utilities for terminal output

use crate::core::{CharStatus, CharacterStatus, LetterFeedback, WORD_LENGTH, Word};
use colored::Colorize;

/// Render per-letter feedback: green for correct, yellow for misplaced, `_` for missing
#[must_use]
pub fn feedback_to_colored(guess: &Word, feedback: &[LetterFeedback; WORD_LENGTH]) -> String {
    guess
        .text()
        .chars()
        .zip(feedback)
        .map(|(letter, mark)| match mark {
            LetterFeedback::Correct => letter.to_string().green().bold().to_string(),
            LetterFeedback::Misplaced => letter.to_string().yellow().bold().to_string(),
            LetterFeedback::Missing => "_".to_string(),
        })
        .collect()
}

/// Render the letter-status strip: present green, absent red, unused plain
#[must_use]
pub fn status_strip(status: &CharacterStatus) -> String {
    let letters: Vec<String> = status
        .iter()
        .map(|(letter, state)| {
            let letter = char::from(letter).to_string();
            match state {
                CharStatus::Present => letter.green().to_string(),
                CharStatus::Absent => letter.red().to_string(),
                CharStatus::Unused => letter,
            }
        })
        .collect();
    format!("[ {} ]", letters.join(", "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
