//! # healthtrack-storage
//!
//! SQLite implementation of `IDataStore`: one serialized write connection,
//! a round-robin pool of read-only connections, versioned migrations, and
//! per-table query modules.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use healthtrack_core::errors::{HealthTrackError, StorageError};

/// Wrap a low-level failure message as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> HealthTrackError {
    HealthTrackError::StorageError(StorageError::SqliteError {
        message: message.into(),
    })
}
