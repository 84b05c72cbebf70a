#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ac() -> Command {
    cargo_bin_cmd!("agricensus")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_agricensus.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a JSON payload to a temp file and return its path
pub fn temp_json(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_payload.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write payload");
    p
}

/// Initialize the schema and register one holder (id 1 on a fresh DB)
pub fn init_db_with_holder(db_path: &str) {
    ac().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ac().args([
        "--db",
        db_path,
        "register",
        "--name",
        "Test Holder",
        "--location",
        "North Andros",
    ])
    .assert()
    .success();
}

/// Count rows in `table` for the given holder, via a direct connection
pub fn holder_rows(db_path: &str, table: &str, holder_id: i64) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(
        &format!("SELECT COUNT(*) FROM {table} WHERE holder_id = ?1"),
        [holder_id],
        |row| row.get(0),
    )
    .expect("count rows")
}
