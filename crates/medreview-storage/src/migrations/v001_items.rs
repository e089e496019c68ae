//! v001: items, item_references.

use rusqlite::Connection;

use medreview_core::errors::ReviewResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ReviewResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS items (
            id              TEXT PRIMARY KEY,
            kind            TEXT NOT NULL,
            subject         TEXT NOT NULL,
            topic           TEXT NOT NULL,
            status          TEXT NOT NULL,
            content         TEXT NOT NULL,
            reviewer_note   TEXT,
            created_at      TEXT NOT NULL,
            updated_at      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_items_kind ON items(kind);
        CREATE INDEX IF NOT EXISTS idx_items_status ON items(status);
        CREATE INDEX IF NOT EXISTS idx_items_created ON items(created_at);

        CREATE TABLE IF NOT EXISTS item_references (
            item_id         TEXT NOT NULL,
            position        INTEGER NOT NULL,
            source          TEXT NOT NULL,
            page            TEXT,
            url             TEXT,
            PRIMARY KEY (item_id, position),
            FOREIGN KEY (item_id) REFERENCES items(id) ON DELETE CASCADE
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
