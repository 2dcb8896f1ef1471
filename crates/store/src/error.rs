//! Error types raised by game stores.

use thiserror::Error;

/// Errors surfaced by [`GameStore`](crate::GameStore) implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported save version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

pub type Result<T> = std::result::Result<T, StoreError>;
