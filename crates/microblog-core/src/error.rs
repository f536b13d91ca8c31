//! Error types for the microblog model.

use thiserror::Error;

/// Top-level result type for microblog model operations.
pub type Result<T> = std::result::Result<T, MicroblogError>;

/// Top-level error type for the microblog model.
#[derive(Debug, Error)]
pub enum MicroblogError {
    #[error("friendship error: {0}")]
    Friendship(#[from] FriendshipError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MicroblogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Errors raised while building or reading a friendship record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FriendshipError {
    /// The record was used before `field` was ever supplied.
    #[error("friendship record is not populated: `{field}` was never supplied")]
    NotPopulated { field: &'static str },

    #[error("account id must be non-negative, got {0}")]
    InvalidId(i64),

    #[error("screen name must not be empty")]
    EmptyScreenName,
}
