//! Versioned schema migrations tracked in `PRAGMA user_version`.

mod v001_items;
mod v002_auto_checks;

use rusqlite::Connection;
use tracing::info;

use medreview_core::errors::{ReviewError, ReviewResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> ReviewResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_items::migrate),
    (2, v002_auto_checks::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 2;

pub fn current_version(conn: &Connection) -> ReviewResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the stored version, each in its own
/// transaction. Returns the number applied.
pub fn run_migrations(conn: &Connection) -> ReviewResult<usize> {
    let current = current_version(conn)?;
    let mut applied = 0;

    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(format!("migration {version} begin: {e}")))?;
        let outcome = migrate(&tx).and_then(|()| {
            tx.pragma_update(None, "user_version", version)
                .map_err(|e| to_storage_err(e.to_string()))
        });
        match outcome {
            Ok(()) => {
                tx.commit()
                    .map_err(|e| to_storage_err(format!("migration {version} commit: {e}")))?;
                info!(version, "applied schema migration");
                applied += 1;
            }
            Err(e) => {
                let _ = tx.rollback();
                return Err(ReviewError::StorageError(StorageError::MigrationFailed {
                    version,
                    reason: e.to_string(),
                }));
            }
        }
    }
    Ok(applied)
}
