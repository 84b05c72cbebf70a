use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{ac, init_db_with_holder, setup_test_db};

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check_info");
    init_db_with_holder(&db_path);

    ac().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Census schema present (9 tables)"));

    ac().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Holders:"))
        .stdout(contains("Agricultural Machinery rows:"));
}

#[test]
fn test_db_migrate_is_rerunnable() {
    let db_path = setup_test_db("db_migrate_rerun");

    ac().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for _ in 0..2 {
        ac().args(["--db", &db_path, "db", "--migrate"])
            .assert()
            .success()
            .stdout(contains("Migration completed"));
    }
}

#[test]
fn test_log_records_saves_and_registrations() {
    let db_path = setup_test_db("log_print");
    init_db_with_holder(&db_path);

    ac().args(["--db", &db_path, "complete", "1", "--section", "1"])
        .assert()
        .success();

    ac().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("register"))
        .stdout(contains("complete"));
}

#[test]
fn test_backup_copies_the_database() {
    let db_path = setup_test_db("backup_copy");
    init_db_with_holder(&db_path);

    let mut dest: PathBuf = env::temp_dir();
    dest.push("backup_copy_agricensus.bak");
    let dest = dest.to_string_lossy().to_string();
    fs::remove_file(&dest).ok();

    ac().args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backing up census database"))
        .stdout(contains("Backup created"))
        .stdout(contains("Holder records covered: 1"));

    assert!(fs::metadata(&dest).map(|m| m.len() > 0).unwrap_or(false));
    fs::remove_file(&dest).ok();
}
