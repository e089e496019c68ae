//! Upsert, get, list and delete for items and their references.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use medreview_core::errors::{ReviewResult, StorageError};
use medreview_core::item::{Item, ItemContent, ItemKind, ItemStatus, Reference};

use crate::to_storage_err;

const ITEM_COLUMNS: &str =
    "id, subject, topic, status, content, reviewer_note, created_at, updated_at";

/// Insert or replace an item with its references in one transaction.
///
/// Uses an upsert rather than `INSERT OR REPLACE` so the auto-check row is
/// not cascaded away on update.
pub fn upsert_item(conn: &Connection, item: &Item) -> ReviewResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("upsert_item begin: {e}")))?;

    match upsert_item_inner(&tx, item) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("upsert_item commit: {e}")))?;
            Ok(())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn upsert_item_inner(conn: &Connection, item: &Item) -> ReviewResult<()> {
    let content_json = serde_json::to_string(&item.content)?;
    // Fixed-width timestamps so ORDER BY created_at is chronological.

    conn.execute(
        "INSERT INTO items (
            id, kind, subject, topic, status, content, reviewer_note, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        ON CONFLICT(id) DO UPDATE SET
            kind = excluded.kind,
            subject = excluded.subject,
            topic = excluded.topic,
            status = excluded.status,
            content = excluded.content,
            reviewer_note = excluded.reviewer_note,
            created_at = excluded.created_at,
            updated_at = excluded.updated_at",
        params![
            item.id,
            item.kind().as_str(),
            item.subject,
            item.topic,
            item.status.as_str(),
            content_json,
            item.reviewer_note,
            item.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
            item.updated_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    conn.execute(
        "DELETE FROM item_references WHERE item_id = ?1",
        params![item.id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    for (position, reference) in item.references.iter().enumerate() {
        conn.execute(
            "INSERT INTO item_references (item_id, position, source, page, url)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                item.id,
                position as i64,
                reference.source,
                reference.page,
                reference.url
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

pub fn get_item(conn: &Connection, id: &str) -> ReviewResult<Option<Item>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![id], |row| Ok(row_to_item(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match result {
        Some(Ok(mut item)) => {
            item.references = load_references(conn, &item.id)?;
            Ok(Some(item))
        }
        Some(Err(e)) => Err(e),
        None => Ok(None),
    }
}

/// All items, oldest first, optionally restricted to one kind.
pub fn list_items(conn: &Connection, kind: Option<ItemKind>) -> ReviewResult<Vec<Item>> {
    let sql = match kind {
        Some(_) => format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE kind = ?1 ORDER BY created_at, id"
        ),
        None => format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at, id"),
    };
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let bound: Vec<&str> = kind.map(|k| vec![k.as_str()]).unwrap_or_default();
    let rows = stmt
        .query_map(params_from_iter(bound), |row| Ok(row_to_item(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut items = Vec::new();
    for row in rows {
        let mut item = row.map_err(|e| to_storage_err(e.to_string()))??;
        item.references = load_references(conn, &item.id)?;
        items.push(item);
    }
    Ok(items)
}

/// Delete an item. References and the auto-check row cascade.
pub fn delete_item(conn: &Connection, id: &str) -> ReviewResult<bool> {
    let changed = conn
        .execute("DELETE FROM items WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

pub fn item_exists(conn: &Connection, id: &str) -> ReviewResult<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM items WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn load_references(conn: &Connection, item_id: &str) -> ReviewResult<Vec<Reference>> {
    let mut stmt = conn
        .prepare(
            "SELECT source, page, url FROM item_references
             WHERE item_id = ?1 ORDER BY position",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![item_id], |row| {
            Ok(Reference {
                source: row.get(0)?,
                page: row.get(1)?,
                url: row.get(2)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn row_to_item(row: &rusqlite::Row<'_>) -> ReviewResult<Item> {
    let id: String = row.get(0).map_err(|e| to_storage_err(e.to_string()))?;
    let status_str: String = row.get(3).map_err(|e| to_storage_err(e.to_string()))?;
    let content_json: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    let created_str: String = row.get(6).map_err(|e| to_storage_err(e.to_string()))?;
    let updated_str: String = row.get(7).map_err(|e| to_storage_err(e.to_string()))?;

    let corrupt = |details: String| StorageError::CorruptRow {
        id: id.clone(),
        details,
    };
    let status: ItemStatus = status_str
        .parse()
        .map_err(|e| corrupt(format!("status: {e}")))?;
    let content: ItemContent =
        serde_json::from_str(&content_json).map_err(|e| corrupt(format!("content: {e}")))?;
    let created_at = parse_time(&created_str).map_err(|e| corrupt(format!("created_at: {e}")))?;
    let updated_at = parse_time(&updated_str).map_err(|e| corrupt(format!("updated_at: {e}")))?;

    Ok(Item {
        id: id.clone(),
        subject: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        topic: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        status,
        content,
        references: Vec::new(),
        reviewer_note: row.get(5).map_err(|e| to_storage_err(e.to_string()))?,
        created_at,
        updated_at,
    })
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|t| t.with_timezone(&Utc))
}
