//! Target word sources
//!
//! A source yields one hidden target per game. Sources can fail (a missing file,
//! an empty list); [`pick_target`] then falls back to a random five-letter string.

use super::loader::{load_from_file, words_from_slice};
use super::ANSWERS;
use crate::core::Word;
use log::warn;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list '{0}' has no valid five-letter words")]
    Empty(String),
}

/// Something that can produce a target word
pub trait WordSource {
    /// Short description for logs and banners
    fn describe(&self) -> String;

    /// Produce a target word
    ///
    /// # Errors
    /// Returns `SourceError` when the source cannot supply a word.
    fn fetch<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, SourceError>;
}

/// Uniform pick from an in-memory list
pub struct ListSource {
    name: String,
    words: Vec<Word>,
}

impl ListSource {
    #[must_use]
    pub fn new(name: impl Into<String>, words: Vec<Word>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new("embedded", words_from_slice(ANSWERS))
    }
}

impl WordSource for ListSource {
    fn describe(&self) -> String {
        format!("{} list ({} words)", self.name, self.words.len())
    }

    fn fetch<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, SourceError> {
        self.words
            .choose(rng)
            .copied()
            .ok_or_else(|| SourceError::Empty(self.name.clone()))
    }
}

/// Uniform pick from a word file, read on every fetch
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn fetch<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, SourceError> {
        let words = load_from_file(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        words
            .choose(rng)
            .copied()
            .ok_or_else(|| SourceError::Empty(self.path.display().to_string()))
    }
}

/// Random five-letter strings, not necessarily real words
pub struct RandomSource;

impl WordSource for RandomSource {
    fn describe(&self) -> String {
        "random letters".to_string()
    }

    fn fetch<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, SourceError> {
        Ok(Word::random(rng))
    }
}

/// Enum wrapper for all source types
///
/// Allows runtime selection of the source while keeping static dispatch.
pub enum SourceType {
    List(ListSource),
    File(FileSource),
    Random(RandomSource),
}

impl SourceType {
    /// Create a source from the `--wordlist` value
    ///
    /// "embedded" (default) and "random" are reserved names; anything else is a path.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "embedded" | "" => Self::List(ListSource::embedded()),
            "random" => Self::Random(RandomSource),
            path => Self::File(FileSource::new(path)),
        }
    }
}

impl WordSource for SourceType {
    fn describe(&self) -> String {
        match self {
            Self::List(s) => s.describe(),
            Self::File(s) => s.describe(),
            Self::Random(s) => s.describe(),
        }
    }

    fn fetch<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, SourceError> {
        match self {
            Self::List(s) => s.fetch(rng),
            Self::File(s) => s.fetch(rng),
            Self::Random(s) => s.fetch(rng),
        }
    }
}

/// Fetch a target from `source`, falling back to random letters on failure
pub fn pick_target<S: WordSource, R: Rng + ?Sized>(source: &S, rng: &mut R) -> Word {
    match source.fetch(rng) {
        Ok(word) => word,
        Err(err) => {
            warn!("{err}; falling back to a random target");
            Word::random(rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn embedded_source_yields_listed_word() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = ListSource::embedded();
        let word = source.fetch(&mut rng).unwrap();
        assert!(ANSWERS.contains(&word.text()));
    }

    #[test]
    fn empty_list_errors() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = ListSource::new("empty", Vec::new());
        assert!(matches!(source.fetch(&mut rng), Err(SourceError::Empty(_))));
    }

    #[test]
    fn missing_file_errors() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = FileSource::new("no/such/words.txt");
        assert!(matches!(source.fetch(&mut rng), Err(SourceError::Io { .. })));
    }

    #[test]
    fn fallback_produces_a_word() {
        let mut rng = StdRng::seed_from_u64(2);
        let word = pick_target(&FileSource::new("no/such/words.txt"), &mut rng);
        assert_eq!(word.text().len(), 5);
    }

    #[test]
    fn from_name_selects_source() {
        assert!(matches!(SourceType::from_name("embedded"), SourceType::List(_)));
        assert!(matches!(SourceType::from_name("random"), SourceType::Random(_)));
        assert!(matches!(SourceType::from_name("words.txt"), SourceType::File(_)));
    }

    #[test]
    fn source_type_dispatches() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = SourceType::from_name("embedded");
        assert!(source.describe().starts_with("embedded"));
        assert!(source.fetch(&mut rng).is_ok());
    }
}
