use crate::core::validate::ValidationReport;
use crate::db::pool::DbPool;
use crate::db::sections::permanent as q;
use crate::errors::AppResult;
use crate::models::worker::{
    AG_TRAINING_OPTIONS, AGE_OPTIONS, EDUCATION_OPTIONS, MAIN_DUTIES_OPTIONS,
    NATIONALITY_OPTIONS, PermanentWorker, POSITION_OPTIONS, SEX_OPTIONS, WORKING_TIME_OPTIONS,
    valid_code,
};

pub fn load(pool: &mut DbPool, holder_id: i64) -> AppResult<Vec<PermanentWorker>> {
    q::load_workers(&pool.conn, holder_id)
}

pub fn validate(rows: &[PermanentWorker]) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (i, w) in rows.iter().enumerate() {
        let n = i + 1;

        // blank rows are empty form slots; they are skipped on save too
        if w.position_title.trim().is_empty() {
            continue;
        }

        let checks: [(&str, &str, &[(&str, &str)]); 8] = [
            ("position title", &w.position_title, &POSITION_OPTIONS),
            ("sex", &w.sex, &SEX_OPTIONS),
            ("age group", &w.age_group, &AGE_OPTIONS),
            ("nationality", &w.nationality, &NATIONALITY_OPTIONS),
            ("education level", &w.education_level, &EDUCATION_OPTIONS),
            ("agricultural training", &w.agri_training, &AG_TRAINING_OPTIONS),
            ("main duties", &w.main_duties, &MAIN_DUTIES_OPTIONS),
            ("working time", &w.working_time, &WORKING_TIME_OPTIONS),
        ];

        for (label, code, options) in checks {
            if !valid_code(options, code) {
                report.error(format!("Worker {}: invalid {} code '{}'", n, label, code));
            }
        }
    }

    report
}

/// Replace-on-save. Blank rows (no position title) are empty form slots
/// and are not persisted; validation skips them by the same rule.
pub fn replace(pool: &mut DbPool, holder_id: i64, rows: &[PermanentWorker]) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;

    q::delete_workers(&tx, holder_id)?;

    let mut written = 0;
    for row in rows {
        if row.position_title.trim().is_empty() {
            continue;
        }
        q::insert_worker(&tx, holder_id, row)?;
        written += 1;
    }

    tx.commit()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker() -> PermanentWorker {
        PermanentWorker {
            id: 0,
            position_title: "2".into(),
            sex: "F".into(),
            age_group: "3".into(),
            nationality: "B".into(),
            education_level: "4".into(),
            agri_training: "Y".into(),
            main_duties: "3".into(),
            working_time: "F".into(),
        }
    }

    #[test]
    fn valid_codes_pass() {
        assert!(validate(&[worker()]).is_clean());
    }

    #[test]
    fn each_bad_code_is_reported() {
        let mut w = worker();
        w.sex = "X".into();
        w.working_time = "P9".into();

        let report = validate(&[w]);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("Worker 1"));
    }

    #[test]
    fn blank_rows_are_ignored_by_validation() {
        let mut blank = worker();
        blank.position_title = "  ".into();
        blank.sex = "garbage".into();

        assert!(validate(&[blank]).is_clean());
    }

    #[test]
    fn replace_skips_blank_rows() {
        let conn = rusqlite::Connection::open_in_memory().expect("open in-memory db");
        crate::db::migrate::run_pending_migrations(&conn).expect("migrate");
        conn.execute(
            "INSERT INTO holders (name, location, status, submitted_at)
             VALUES ('Test Holder', '', 'active', '2025-08-01T00:00:00+00:00')",
            [],
        )
        .expect("seed holder");
        let mut pool = DbPool { conn };

        let mut blank = worker();
        blank.position_title = "".into();

        let written = replace(&mut pool, 1, &[worker(), blank]).expect("replace");
        assert_eq!(written, 1);

        let count: i64 = pool
            .conn
            .query_row(
                "SELECT COUNT(*) FROM holding_labour_permanent WHERE holder_id = 1",
                [],
                |row| row.get(0),
            )
            .expect("count");
        assert_eq!(count, 1);
    }
}
