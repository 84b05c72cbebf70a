use predicates::str::contains;

mod common;
use common::{ac, init_db_with_holder, setup_test_db};

#[test]
fn test_register_and_list_holders() {
    let db_path = setup_test_db("register_list");

    init_db_with_holder(&db_path);

    ac().args([
        "--db",
        &db_path,
        "register",
        "--name",
        "Second Farm",
    ])
    .assert()
    .success()
    .stdout(contains("Registered holder 2 'Second Farm'"));

    ac().args(["--db", &db_path, "holders"])
        .assert()
        .success()
        .stdout(contains("Test Holder"))
        .stdout(contains("Second Farm"))
        .stdout(contains("0/5"));
}

#[test]
fn test_backfill_creates_holders_for_holder_accounts() {
    let db_path = setup_test_db("backfill");

    ac().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    {
        let conn = rusqlite::Connection::open(&db_path).expect("open db");
        conn.execute_batch(
            "INSERT INTO users (username, role) VALUES ('maria', 'Holder');
             INSERT INTO users (username, role) VALUES ('clerk', 'Admin');
             INSERT INTO users (username, role) VALUES ('joseph', 'Holder');",
        )
        .expect("seed users");
    }

    ac().args(["--db", &db_path, "backfill"])
        .assert()
        .success()
        .stdout(contains("Backfilled 2 holder(s)"));

    // second run finds nothing left to create
    ac().args(["--db", &db_path, "backfill"])
        .assert()
        .success()
        .stdout(contains("Nothing to backfill"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let holders: i64 = conn
        .query_row("SELECT COUNT(*) FROM holders", [], |row| row.get(0))
        .expect("count");
    assert_eq!(holders, 2);
}

#[test]
fn test_unknown_holder_is_an_error() {
    let db_path = setup_test_db("unknown_holder");

    ac().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ac().args(["--db", &db_path, "status", "99"])
        .assert()
        .failure()
        .stderr(contains("No holder found with id 99"));
}
