use crate::errors::AppResult;
use crate::models::labour::{DEFAULT_QUESTIONS, LabourAnswer};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<LabourAnswer> {
    Ok(LabourAnswer {
        id: row.get("id")?,
        question_no: row.get("question_no")?,
        question_text: row.get("question_text")?,
        male_count: row.get("male_count")?,
        female_count: row.get("female_count")?,
        total_count: row.get("total_count")?,
        option_response: row.get("option_response")?,
    })
}

/// All labour answers for a holder, in question order.
pub fn load_answers(conn: &Connection, holder_id: i64) -> AppResult<Vec<LabourAnswer>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, question_no, question_text, male_count, female_count,
                total_count, option_response
         FROM holding_labour
         WHERE holder_id = ?1
         ORDER BY question_no ASC",
    )?;

    let rows = stmt.query_map([holder_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_answer(conn: &Connection, holder_id: i64, ans: &LabourAnswer) -> AppResult<()> {
    conn.execute(
        "INSERT INTO holding_labour
         (holder_id, question_no, question_text, male_count, female_count,
          total_count, option_response)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            holder_id,
            ans.question_no,
            ans.question_text,
            ans.male_count,
            ans.female_count,
            ans.total_count,
            ans.option_response,
        ],
    )?;
    Ok(())
}

pub fn delete_answers(conn: &Connection, holder_id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM holding_labour WHERE holder_id = ?1", [holder_id])?;
    Ok(n)
}

/// Seed the six default questions for a first-time holder.
pub fn seed_default_questions(conn: &Connection, holder_id: i64) -> AppResult<()> {
    for (q_no, q_text) in DEFAULT_QUESTIONS {
        insert_answer(conn, holder_id, &LabourAnswer::seeded(q_no, q_text))?;
    }
    Ok(())
}

/// Upsert a single answer by (holder, question): the step-wise wizard path
/// updates one question at a time rather than replacing the whole section.
pub fn upsert_answer(conn: &Connection, holder_id: i64, ans: &LabourAnswer) -> AppResult<()> {
    let exists: Option<i64> = conn
        .query_row(
            "SELECT id FROM holding_labour WHERE holder_id = ?1 AND question_no = ?2",
            params![holder_id, ans.question_no],
            |row| row.get(0),
        )
        .optional()?;

    if exists.is_some() {
        conn.execute(
            "UPDATE holding_labour
             SET male_count = ?1, female_count = ?2, total_count = ?3,
                 option_response = ?4
             WHERE holder_id = ?5 AND question_no = ?6",
            params![
                ans.male_count,
                ans.female_count,
                ans.total_count,
                ans.option_response,
                holder_id,
                ans.question_no,
            ],
        )?;
    } else {
        insert_answer(conn, holder_id, ans)?;
    }

    Ok(())
}
