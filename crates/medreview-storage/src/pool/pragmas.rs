//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use medreview_core::config::StorageConfig;
use medreview_core::errors::ReviewResult;

use crate::to_storage_err;

/// Pragmas for the write connection. Foreign keys must be on for the
/// auto-check cascade.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> ReviewResult<()> {
    let journal = if config.wal_mode { "WAL" } else { "DELETE" };
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = {journal};
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {timeout};
        PRAGMA foreign_keys = ON;
        ",
        timeout = config.busy_timeout_ms,
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Pragmas for read connections.
pub fn apply_read_pragmas(conn: &Connection, config: &StorageConfig) -> ReviewResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA busy_timeout = {timeout};
        PRAGMA query_only = ON;
        ",
        timeout = config.busy_timeout_ms,
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Whether WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> ReviewResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
