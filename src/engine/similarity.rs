//! Normalized edit-distance similarity

use crate::error::{EngineError, Result};

/// Levenshtein distance with unit insertion, deletion and substitution cost
#[must_use]
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Single rolling row of the DP matrix
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = (row[j + 1] + 1).min(row[j] + 1).min(substitution);
        }
    }

    row[b.len()]
}

/// Similarity of two equal-length words: `1 - distance / length`
///
/// Returns a value in `[0, 1]`, where `1.0` means identical. Length is counted
/// in characters, not bytes.
///
/// # Errors
/// Returns `EngineError::InvalidInput` if the lengths differ or the words are empty.
///
/// # Examples
/// ```
/// use wordle_evolve::engine::similarity_score;
///
/// let score = similarity_score("hello", "hallo").unwrap();
/// assert!((score - 0.8).abs() < 1e-12);
/// ```
pub fn similarity_score(a: &str, b: &str) -> Result<f64> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len() != b.len() {
        return Err(EngineError::InvalidInput(format!(
            "similarity needs equal-length words, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    if a.is_empty() {
        return Err(EngineError::InvalidInput(
            "similarity needs non-empty words".to_string(),
        ));
    }

    let distance = edit_distance(&a, &b);
    Ok(1.0 - distance as f64 / a.len() as f64)
}
