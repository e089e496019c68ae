//! The single serialized write connection.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use medreview_core::config::StorageConfig;
use medreview_core::errors::{ReviewResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, config: &StorageConfig) -> ReviewResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory(config: &StorageConfig) -> ReviewResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the writer.
    pub fn with_conn_sync<F, T>(&self, f: F) -> ReviewResult<T>
    where
        F: FnOnce(&Connection) -> ReviewResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned {
            what: "write connection".to_string(),
        })?;
        f(&guard)
    }
}
