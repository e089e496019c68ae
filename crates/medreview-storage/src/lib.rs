//! # medreview-storage
//!
//! Injected repositories for items and their auto-check results.
//!
//! - [`InMemoryRepository`]: DashMap-backed, for tests and database-less runs.
//! - [`StorageEngine`]: SQLite with a single writer, a read pool, versioned
//!   migrations and cascade delete of auto-check rows.

pub mod engine;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;
pub use memory::InMemoryRepository;

use medreview_core::errors::{ReviewError, StorageError};

/// Wrap a SQLite-level failure message in the top-level error.
pub fn to_storage_err(message: String) -> ReviewError {
    ReviewError::StorageError(StorageError::SqliteError { message })
}
