//! Auto-check result rows: replace, get, list.

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;

use medreview_core::errors::{ReviewError, ReviewResult, StorageError};
use medreview_core::models::{AutoCheckResult, BloomLevel, CoverageLevel};

use super::item_crud::item_exists;
use crate::to_storage_err;

const CHECK_COLUMNS: &str = "item_id, groundedness_score, faithfulness_score, reference_coverage,
    possible_duplicates, claims_with_numbers, conflicts, bloom_level, suggested_comps,
    content_hash, degraded";

/// Replace the stored result for `result.item_id`. Fails with
/// `ItemNotFound` when the item does not exist.
pub fn upsert_checks(conn: &Connection, result: &AutoCheckResult) -> ReviewResult<()> {
    if !item_exists(conn, &result.item_id)? {
        return Err(ReviewError::ItemNotFound {
            id: result.item_id.clone(),
        });
    }

    let bloom = serde_json::to_string(&result.bloom_level)?;
    conn.execute(
        "INSERT INTO auto_checks (
            item_id, groundedness_score, faithfulness_score, reference_coverage,
            possible_duplicates, claims_with_numbers, conflicts, bloom_level,
            suggested_comps, content_hash, degraded, computed_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11,
                  strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        ON CONFLICT(item_id) DO UPDATE SET
            groundedness_score = excluded.groundedness_score,
            faithfulness_score = excluded.faithfulness_score,
            reference_coverage = excluded.reference_coverage,
            possible_duplicates = excluded.possible_duplicates,
            claims_with_numbers = excluded.claims_with_numbers,
            conflicts = excluded.conflicts,
            bloom_level = excluded.bloom_level,
            suggested_comps = excluded.suggested_comps,
            content_hash = excluded.content_hash,
            degraded = excluded.degraded,
            computed_at = excluded.computed_at",
        params![
            result.item_id,
            result.groundedness_score,
            result.faithfulness_score,
            result.reference_coverage.as_str(),
            serde_json::to_string(&result.possible_duplicates)?,
            serde_json::to_string(&result.claims_with_numbers)?,
            serde_json::to_string(&result.conflicts)?,
            bloom.trim_matches('"'),
            serde_json::to_string(&result.suggested_comps)?,
            result.content_hash,
            serde_json::to_string(&result.degraded)?,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_checks(conn: &Connection, item_id: &str) -> ReviewResult<Option<AutoCheckResult>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {CHECK_COLUMNS} FROM auto_checks WHERE item_id = ?1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    stmt.query_row(params![item_id], |row| Ok(row_to_checks(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .transpose()
}

pub fn list_checks(conn: &Connection) -> ReviewResult<Vec<AutoCheckResult>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {CHECK_COLUMNS} FROM auto_checks ORDER BY item_id"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| Ok(row_to_checks(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(results)
}

fn row_to_checks(row: &rusqlite::Row<'_>) -> ReviewResult<AutoCheckResult> {
    let item_id: String = row.get(0).map_err(|e| to_storage_err(e.to_string()))?;
    let coverage_str: String = row.get(3).map_err(|e| to_storage_err(e.to_string()))?;
    let bloom_str: String = row.get(7).map_err(|e| to_storage_err(e.to_string()))?;

    let corrupt = |column: &str, details: String| StorageError::CorruptRow {
        id: item_id.clone(),
        details: format!("{column}: {details}"),
    };
    let coverage: CoverageLevel = coverage_str
        .parse()
        .map_err(|e: ReviewError| corrupt("reference_coverage", e.to_string()))?;
    let bloom: BloomLevel = serde_json::from_value(serde_json::Value::String(bloom_str))
        .map_err(|e| corrupt("bloom_level", e.to_string()))?;

    Ok(AutoCheckResult {
        item_id: item_id.clone(),
        groundedness_score: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        faithfulness_score: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        reference_coverage: coverage,
        possible_duplicates: json_column(row, 4, &item_id)?,
        claims_with_numbers: json_column(row, 5, &item_id)?,
        conflicts: json_column(row, 6, &item_id)?,
        bloom_level: bloom,
        suggested_comps: json_column(row, 8, &item_id)?,
        content_hash: row.get(9).map_err(|e| to_storage_err(e.to_string()))?,
        degraded: json_column(row, 10, &item_id)?,
    })
}

/// Decode a JSON list column.
fn json_column<T: DeserializeOwned>(
    row: &rusqlite::Row<'_>,
    idx: usize,
    item_id: &str,
) -> ReviewResult<T> {
    let raw: String = row.get(idx).map_err(|e| to_storage_err(e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| {
        StorageError::CorruptRow {
            id: item_id.to_string(),
            details: format!("column {idx}: {e}"),
        }
        .into()
    })
}
