//! Error types for the suggestion engine

use thiserror::Error;

/// Errors raised by the engine operations
///
/// All of them are fatal to the operation that produced them; nothing in the
/// engine retries or substitutes defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed word or size argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every letter is marked absent, so no child letter can be drawn
    #[error("Every letter is marked absent; no letters left to draw from")]
    EmptyAlphabet,

    /// The black-box search produced no usable result
    #[error("Optimizer failure: {0}")]
    OptimizerFailure(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EngineError::InvalidInput("bad".into()).to_string(),
            "Invalid input: bad"
        );
        assert!(EngineError::EmptyAlphabet.to_string().contains("absent"));
        assert_eq!(
            EngineError::OptimizerFailure("no calls".into()).to_string(),
            "Optimizer failure: no calls"
        );
    }
}
