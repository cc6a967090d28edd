//! Leaderboard error taxonomy.
//!
//! Two classes with different surfacing rules: `Validation` means the
//! client sent a bad submission (reject, no retry); `Backend` means the
//! store misbehaved (retryable for writes, degrades to an empty list for
//! reads).

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("corrupt leaderboard data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("invalid score submission: {0}")]
    Validation(String),
    #[error("leaderboard backend error: {0}")]
    Backend(#[from] StoreError),
}
