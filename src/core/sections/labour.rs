use crate::core::validate::ValidationReport;
use crate::db::pool::DbPool;
use crate::db::progress;
use crate::db::sections::labour as q;
use crate::errors::AppResult;
use crate::models::labour::{DEFAULT_QUESTIONS, LabourAnswer, OPTION_RESPONSES};
use crate::models::section::Section;

/// Existing answers for a holder, seeding the default question set on the
/// first visit so the form always has rows to show.
pub fn load_or_seed(pool: &mut DbPool, holder_id: i64) -> AppResult<Vec<LabourAnswer>> {
    let existing = q::load_answers(&pool.conn, holder_id)?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    q::seed_default_questions(&pool.conn, holder_id)?;
    q::load_answers(&pool.conn, holder_id)
}

pub fn validate(rows: &[LabourAnswer]) -> ValidationReport {
    let mut report = ValidationReport::new();

    for row in rows {
        let q_no = row.question_no;

        if !(2..=7).contains(&q_no) {
            report.error(format!("Q{}: unknown labour question number", q_no));
            continue;
        }

        if row.is_count_question() {
            if row.male_count < 0 {
                report.error(format!("Q{}: male count cannot be negative", q_no));
            }
            if row.female_count < 0 {
                report.error(format!("Q{}: female count cannot be negative", q_no));
            }
        } else if !OPTION_RESPONSES.contains(&row.option_response.as_str()) {
            report.error(format!(
                "Q{}: response must be one of Yes, No, Not Applicable (got '{}')",
                q_no, row.option_response
            ));
        }
    }

    report
}

/// Recompute the derived total before any row reaches persistence.
fn normalized(row: &LabourAnswer) -> LabourAnswer {
    let mut out = row.clone();
    if out.is_count_question() {
        out.total_count = out.male_count + out.female_count;
    } else {
        out.male_count = 0;
        out.female_count = 0;
        out.total_count = 0;
    }
    out
}

/// Replace-on-save for the whole section.
pub fn replace(pool: &mut DbPool, holder_id: i64, rows: &[LabourAnswer]) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;

    q::delete_answers(&tx, holder_id)?;
    for row in rows {
        q::insert_answer(&tx, holder_id, &normalized(row))?;
    }

    tx.commit()?;
    Ok(rows.len())
}

/// Step-wise wizard path: record a single answer and report whether the
/// section just ran out of remaining questions. Completion is marked here,
/// never by the navigator crossing its bound.
pub fn record_answer(
    pool: &mut DbPool,
    holder_id: i64,
    ans: &LabourAnswer,
) -> AppResult<bool> {
    q::upsert_answer(&pool.conn, holder_id, &normalized(ans))?;

    let last_question = DEFAULT_QUESTIONS.last().map(|(no, _)| *no).unwrap_or(7);
    let finished = ans.question_no >= last_question;

    if finished {
        progress::mark_complete(&pool.conn, holder_id, Section::Labour.number())?;
    }

    Ok(finished)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_question_totals_are_recomputed() {
        let mut ans = LabourAnswer::seeded(2, "q");
        ans.male_count = 3;
        ans.female_count = 4;
        ans.total_count = 99; // stale client value, must not survive

        assert_eq!(normalized(&ans).total_count, 7);
    }

    #[test]
    fn option_question_rejects_free_text() {
        let mut ans = LabourAnswer::seeded(5, "q");
        ans.option_response = "Maybe".to_string();

        let report = validate(&[ans]);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn negative_counts_are_collected_together() {
        let mut ans = LabourAnswer::seeded(3, "q");
        ans.male_count = -1;
        ans.female_count = -2;

        let report = validate(&[ans]);
        assert_eq!(report.errors.len(), 2);
    }

    fn memory_pool_with_holder() -> DbPool {
        let conn = rusqlite::Connection::open_in_memory().expect("open in-memory db");
        crate::db::migrate::run_pending_migrations(&conn).expect("migrate");
        conn.execute(
            "INSERT INTO holders (name, location, status, submitted_at)
             VALUES ('Test Holder', '', 'active', '2025-08-01T00:00:00+00:00')",
            [],
        )
        .expect("seed holder");
        DbPool { conn }
    }

    #[test]
    fn answering_the_last_question_completes_the_section() {
        let mut pool = memory_pool_with_holder();

        let mut mid = LabourAnswer::seeded(5, "q5");
        mid.option_response = "Yes".to_string();
        assert!(!record_answer(&mut pool, 1, &mid).expect("record q5"));

        let last = LabourAnswer::seeded(7, "q7");
        assert!(record_answer(&mut pool, 1, &last).expect("record q7"));

        let completed = progress::get_completed(&pool.conn, 1).expect("completed");
        assert!(completed.contains(&2));

        // answering again updates in place, no duplicate row
        let count: i64 = pool
            .conn
            .query_row(
                "SELECT COUNT(*) FROM holding_labour WHERE holder_id = 1 AND question_no = 7",
                [],
                |row| row.get(0),
            )
            .expect("count");
        record_answer(&mut pool, 1, &last).expect("record q7 again");
        let count_after: i64 = pool
            .conn
            .query_row(
                "SELECT COUNT(*) FROM holding_labour WHERE holder_id = 1 AND question_no = 7",
                [],
                |row| row.get(0),
            )
            .expect("count");
        assert_eq!(count, 1);
        assert_eq!(count_after, 1);
    }
}
