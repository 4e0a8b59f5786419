//! Word lists and target sources
//!
//! Provides the embedded target list compiled into the binary, a file loader, and
//! the sources a game draws its hidden target from.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use source::{
    FileSource, ListSource, RandomSource, SourceError, SourceType, WordSource, pick_target,
};
