use crate::errors::{AppError, AppResult};
use crate::models::holder::Holder;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<Holder> {
    Ok(Holder {
        id: row.get("id")?,
        name: row.get("name")?,
        location: row.get("location")?,
        owner_id: row.get("owner_id")?,
        status: row.get("status")?,
        submitted_at: row.get("submitted_at")?,
    })
}

pub fn insert_holder(
    conn: &Connection,
    name: &str,
    location: &str,
    owner_id: Option<i64>,
    status: &str,
) -> AppResult<Holder> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO holders (name, location, owner_id, status, submitted_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![name, location, owner_id, status, now],
    )?;

    let id = conn.last_insert_rowid();
    find_holder(conn, id)?.ok_or(AppError::HolderNotFound(id))
}

pub fn find_holder(conn: &Connection, id: i64) -> AppResult<Option<Holder>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, location, owner_id, status, submitted_at
         FROM holders WHERE id = ?1",
    )?;

    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Resolve a holder or fail with a domain error the shell can show.
pub fn require_holder(conn: &Connection, id: i64) -> AppResult<Holder> {
    find_holder(conn, id)?.ok_or(AppError::HolderNotFound(id))
}

pub fn list_holders(conn: &Connection) -> AppResult<Vec<Holder>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, location, owner_id, status, submitted_at
         FROM holders ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_holder_by_owner(conn: &Connection, owner_id: i64) -> AppResult<Option<i64>> {
    let id: Option<i64> = conn
        .query_row(
            "SELECT id FROM holders WHERE owner_id = ?1",
            [owner_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

/// User accounts with the Holder role (backfill source).
pub fn holder_users(conn: &Connection) -> AppResult<Vec<(i64, String)>> {
    let mut stmt =
        conn.prepare("SELECT id, username FROM users WHERE role = 'Holder' ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
