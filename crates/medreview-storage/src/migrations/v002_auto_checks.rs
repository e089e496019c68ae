//! v002: auto_checks, one row per item, removed with the item.

use rusqlite::Connection;

use medreview_core::errors::ReviewResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ReviewResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS auto_checks (
            item_id             TEXT PRIMARY KEY,
            groundedness_score  INTEGER NOT NULL,
            faithfulness_score  INTEGER NOT NULL,
            reference_coverage  TEXT NOT NULL,
            possible_duplicates TEXT NOT NULL DEFAULT '[]',
            claims_with_numbers TEXT NOT NULL DEFAULT '[]',
            conflicts           TEXT NOT NULL DEFAULT '[]',
            bloom_level         TEXT NOT NULL,
            suggested_comps     TEXT NOT NULL DEFAULT '[]',
            content_hash        TEXT NOT NULL,
            degraded            TEXT NOT NULL DEFAULT '[]',
            computed_at         TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            FOREIGN KEY (item_id) REFERENCES items(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_auto_checks_coverage ON auto_checks(reference_coverage);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
