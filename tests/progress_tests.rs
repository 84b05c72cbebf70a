use predicates::str::contains;

mod common;
use common::{ac, init_db_with_holder, setup_test_db};

#[test]
fn test_mark_complete_is_idempotent() {
    let db_path = setup_test_db("complete_idempotent");
    init_db_with_holder(&db_path);

    for _ in 0..2 {
        ac().args(["--db", &db_path, "complete", "1", "--section", "2"])
            .assert()
            .success()
            .stdout(contains("marked complete"));
    }

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (rows, completed): (i64, i64) = conn
        .query_row(
            "SELECT COUNT(*), MAX(completed) FROM holder_survey_progress
             WHERE holder_id = 1 AND section_no = 2",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("progress fact");

    assert_eq!(rows, 1);
    assert_eq!(completed, 1);
}

#[test]
fn test_status_shows_two_of_five() {
    let db_path = setup_test_db("status_two_of_five");
    init_db_with_holder(&db_path);

    ac().args(["--db", &db_path, "complete", "1", "--section", "1"])
        .assert()
        .success();
    ac().args(["--db", &db_path, "complete", "1", "--section", "2"])
        .assert()
        .success();

    ac().args(["--db", &db_path, "status", "1"])
        .assert()
        .success()
        .stdout(contains("[██░░░] 2/5"))
        .stdout(contains("40%"));
}

#[test]
fn test_resume_points_at_first_incomplete_section() {
    let db_path = setup_test_db("resume_first_incomplete");
    init_db_with_holder(&db_path);

    // fresh survey starts at the beginning
    ac().args(["--db", &db_path, "resume", "1"])
        .assert()
        .success()
        .stdout(contains("resumes at section 1"));

    ac().args(["--db", &db_path, "complete", "1", "--section", "1"])
        .assert()
        .success();
    ac().args(["--db", &db_path, "complete", "1", "--section", "2"])
        .assert()
        .success();

    ac().args(["--db", &db_path, "resume", "1"])
        .assert()
        .success()
        .stdout(contains("resumes at section 3"))
        .stdout(contains("Permanent Workers"));
}

#[test]
fn test_all_sections_complete_reported() {
    let db_path = setup_test_db("resume_all_done");
    init_db_with_holder(&db_path);

    for n in 1..=5 {
        ac().args(["--db", &db_path, "complete", "1", "--section", &n.to_string()])
            .assert()
            .success();
    }

    ac().args(["--db", &db_path, "resume", "1"])
        .assert()
        .success()
        .stdout(contains("completed all 5 sections"));
}

#[test]
fn test_unknown_section_is_rejected() {
    let db_path = setup_test_db("unknown_section");
    init_db_with_holder(&db_path);

    ac().args(["--db", &db_path, "complete", "1", "--section", "9"])
        .assert()
        .failure()
        .stderr(contains("Unknown survey section: 9"));
}
