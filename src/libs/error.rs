//! Error types for the session store and the tracker.

use thiserror::Error;

/// Failures surfaced by `SessionStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `update` targeted a row that does not exist.
    #[error("sleep session #{0} not found")]
    NotFound(i64),

    /// `update` was called with a session that was never inserted.
    #[error("sleep session has no id")]
    MissingId,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The blocking worker running the query panicked or was cancelled.
    #[error("database worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Failures surfaced by `SleepTracker` actions.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid sleep quality {0}")]
    InvalidQuality(i32),
}
