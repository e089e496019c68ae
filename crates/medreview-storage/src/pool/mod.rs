//! Connection pool: one write connection plus a small read pool.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use medreview_core::config::StorageConfig;
use medreview_core::errors::ReviewResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and the read connections.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: ReadPool,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a pool for the given database file. The writer is opened first so
    /// the file exists before the read-only connections attach.
    pub fn open(path: &Path, config: &StorageConfig, read_pool_size: usize) -> ReviewResult<Self> {
        let writer = WriteConnection::open(path, config)?;
        let readers = ReadPool::open(path, config, read_pool_size)?;
        Ok(Self {
            writer,
            readers,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool. Readers would be separate databases, so callers
    /// route reads through the writer.
    pub fn open_in_memory(config: &StorageConfig) -> ReviewResult<Self> {
        let writer = WriteConnection::open_in_memory(config)?;
        let readers = ReadPool::open_in_memory(config, 1)?;
        Ok(Self {
            writer,
            readers,
            db_path: None,
        })
    }
}
