use crate::errors::AppResult;
use crate::models::worker::PermanentWorker;
use rusqlite::{Connection, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<PermanentWorker> {
    Ok(PermanentWorker {
        id: row.get("id")?,
        position_title: row.get("position_title")?,
        sex: row.get("sex")?,
        age_group: row.get("age_group")?,
        nationality: row.get("nationality")?,
        education_level: row.get("education_level")?,
        agri_training: row.get("agri_training")?,
        main_duties: row.get("main_duties")?,
        working_time: row.get("working_time")?,
    })
}

/// Saved permanent worker rows for a holder, in insertion order.
pub fn load_workers(conn: &Connection, holder_id: i64) -> AppResult<Vec<PermanentWorker>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, position_title, sex, age_group, nationality, education_level,
                agri_training, main_duties, working_time
         FROM holding_labour_permanent
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

pub fn insert_worker(conn: &Connection, holder_id: i64, w: &PermanentWorker) -> AppResult<()> {
    conn.execute(
        "INSERT INTO holding_labour_permanent
         (holder_id, position_title, sex, age_group, nationality, education_level,
          agri_training, main_duties, working_time)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            holder_id,
            w.position_title,
            w.sex,
            w.age_group,
            w.nationality,
            w.education_level,
            w.agri_training,
            w.main_duties,
            w.working_time,
        ],
    )?;
    Ok(())
}

pub fn delete_workers(conn: &Connection, holder_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM holding_labour_permanent WHERE holder_id = ?1",
        [holder_id],
    )?;
    Ok(n)
}
