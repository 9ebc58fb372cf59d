//! Error types for textrank_keywords
//!
//! Every failure in the library is reported as a [`TextRankError`] value so
//! callers can branch on it. Nothing in the graph or ranking code panics on
//! bad input.

use crate::types::TokenId;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextRankError>;

/// Main error type for textrank_keywords
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextRankError {
    /// Malformed argument: bad window length, self-loop edge, missing
    /// position weights
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Input text or token sequence is empty
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// A query referenced a vertex that is not in the graph
    #[error("Unknown vertex: {vertex}")]
    UnknownVertex { vertex: TokenId },

    /// Ranking hit the iteration cap before reaching the threshold.
    /// Note: This is not fatal - the last computed scores are still usable
    #[error("Convergence failure after {iterations} iterations (delta={delta:.6})")]
    ConvergenceFailure { iterations: usize, delta: f64 },

    /// The encoder was asked to decode an id it never issued
    #[error("Cannot decode token id {id}: never issued by this encoder")]
    DecodeMiss { id: TokenId },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TextRankError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an unknown vertex error
    pub fn unknown_vertex(vertex: TokenId) -> Self {
        Self::UnknownVertex { vertex }
    }

    /// Create a convergence failure error
    pub fn convergence_failure(iterations: usize, delta: f64) -> Self {
        Self::ConvergenceFailure { iterations, delta }
    }

    /// Create a decode miss error
    pub fn decode_miss(id: TokenId) -> Self {
        Self::DecodeMiss { id }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error indicates non-convergence
    /// (which may still have usable partial results)
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }
}

impl From<serde_json::Error> for TextRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
