use crate::errors::AppResult;
use crate::models::machinery::{MachineryRow, Ownership, YesNo};
use rusqlite::{Connection, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<MachineryRow> {
    let has_str: String = row.get("has_item")?;
    let has_item = YesNo::from_db_str(&has_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("Invalid has_item flag: {}", has_str).into(),
        )
    })?;

    let source_str: String = row.get("source")?;
    let source = Ownership::from_db_str(&source_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("Invalid source code: {}", source_str).into(),
        )
    })?;

    Ok(MachineryRow {
        id: row.get("id")?,
        has_item,
        equipment_name: row.get("equipment_name")?,
        quantity_new: row.get("quantity_new")?,
        quantity_used: row.get("quantity_used")?,
        quantity_out_of_service: row.get("quantity_out_of_service")?,
        source,
    })
}

/// Saved machinery rows for a holder, in insertion order.
pub fn load_rows(conn: &Connection, holder_id: i64) -> AppResult<Vec<MachineryRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, has_item, equipment_name, quantity_new, quantity_used,
                quantity_out_of_service, source
         FROM agricultural_machinery
         WHERE holder_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([holder_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_row(conn: &Connection, holder_id: i64, m: &MachineryRow) -> AppResult<()> {
    conn.execute(
        "INSERT INTO agricultural_machinery
         (holder_id, has_item, equipment_name, quantity_new, quantity_used,
          quantity_out_of_service, source)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            holder_id,
            m.has_item.to_db_str(),
            m.equipment_name,
            m.quantity_new,
            m.quantity_used,
            m.quantity_out_of_service,
            m.source.to_db_str(),
        ],
    )?;
    Ok(())
}

pub fn delete_rows(conn: &Connection, holder_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM agricultural_machinery WHERE holder_id = ?1",
        [holder_id],
    )?;
    Ok(n)
}
