//! Progress tracker: one fact per (holder, section), forward-only.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeSet;

/// Mark a section complete for a holder. Idempotent: existence check, then
/// update-in-place or insert. There is deliberately no inverse operation.
pub fn mark_complete(conn: &Connection, holder_id: i64, section_no: u32) -> AppResult<()> {
    let exists: Option<i64> = conn
        .query_row(
            "SELECT id FROM holder_survey_progress
             WHERE holder_id = ?1 AND section_no = ?2",
            params![holder_id, section_no],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(id) = exists {
        conn.execute(
            "UPDATE holder_survey_progress SET completed = 1 WHERE id = ?1",
            [id],
        )?;
    } else {
        conn.execute(
            "INSERT INTO holder_survey_progress (holder_id, section_no, completed)
             VALUES (?1, ?2, 1)",
            params![holder_id, section_no],
        )?;
    }

    Ok(())
}

/// Pure read: the set of completed section numbers for a holder.
pub fn get_completed(conn: &Connection, holder_id: i64) -> AppResult<BTreeSet<u32>> {
    let mut stmt = conn.prepare_cached(
        "SELECT section_no FROM holder_survey_progress
         WHERE holder_id = ?1 AND completed = 1",
    )?;

    let rows = stmt.query_map([holder_id], |row| row.get::<_, u32>(0))?;

    let mut out = BTreeSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}
