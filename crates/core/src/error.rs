use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while reading and shaping usage input.
#[derive(Error, Debug)]
pub enum CoachError {
    /// The usage list is absent or empty (`null`, `[]`, `{}`, `""`, `0`, `false`).
    #[error("No data provided")]
    NoData,

    /// The body is not the expected shape (not an object, `usage` not an
    /// array, a record missing `domain` or `time`).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoachError {
    /// Whether the caller sent no usage at all, as opposed to broken usage.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

pub type Result<T> = StdResult<T, CoachError>;
