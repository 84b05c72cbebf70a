use predicates::str::contains;

mod common;
use common::{ac, holder_rows, init_db_with_holder, setup_test_db, temp_json};

#[test]
fn test_machinery_save_then_load_round_trip() {
    let db_path = setup_test_db("machinery_round_trip");
    init_db_with_holder(&db_path);

    let payload = temp_json(
        "machinery_round_trip",
        r#"[
            {"has_item":"Y","equipment_name":"Tractors (below 100 horsepower)",
             "quantity_new":1,"quantity_used":2,"quantity_out_of_service":0,"source":"O"},
            {"has_item":"N","equipment_name":"Sprayers and dusters",
             "quantity_new":0,"quantity_used":0,"quantity_out_of_service":0,"source":"RL"}
        ]"#,
    );

    ac().args([
        "--db", &db_path, "save", "1", "--section", "4", "--file", &payload,
    ])
    .assert()
    .success()
    .stdout(contains("Agricultural Machinery saved (2 rows)"));

    ac().args(["--db", &db_path, "load", "1", "--section", "4", "--json"])
        .assert()
        .success()
        .stdout(contains("Tractors (below 100 horsepower)"))
        .stdout(contains("Sprayers and dusters"));

    assert_eq!(holder_rows(&db_path, "agricultural_machinery", 1), 2);
}

#[test]
fn test_second_save_fully_supersedes_the_first() {
    let db_path = setup_test_db("machinery_supersede");
    init_db_with_holder(&db_path);

    let first = temp_json(
        "machinery_supersede_a",
        r#"[
            {"has_item":"Y","equipment_name":"Trucks (including pickups)",
             "quantity_new":1,"quantity_used":0,"quantity_out_of_service":0,"source":"O"},
            {"has_item":"Y","equipment_name":"Sprayers and dusters",
             "quantity_new":0,"quantity_used":3,"quantity_out_of_service":0,"source":"B"}
        ]"#,
    );
    let second = temp_json(
        "machinery_supersede_b",
        r#"[
            {"has_item":"Y","equipment_name":"Cars / Jeeps / Station Wagons",
             "quantity_new":0,"quantity_used":1,"quantity_out_of_service":0,"source":"O"}
        ]"#,
    );

    for payload in [&first, &second] {
        ac().args([
            "--db", &db_path, "save", "1", "--section", "4", "--file", payload,
        ])
        .assert()
        .success();
    }

    assert_eq!(holder_rows(&db_path, "agricultural_machinery", 1), 1);

    ac().args(["--db", &db_path, "load", "1", "--section", "4", "--json"])
        .assert()
        .success()
        .stdout(contains("Cars / Jeeps / Station Wagons"));
}

#[test]
fn test_empty_save_is_a_warning_no_op() {
    let db_path = setup_test_db("empty_save");
    init_db_with_holder(&db_path);

    let payload = temp_json("empty_save", "[]");

    ac().args([
        "--db", &db_path, "save", "1", "--section", "4", "--file", &payload,
    ])
    .assert()
    .success()
    .stdout(contains("Nothing to save"));

    assert_eq!(holder_rows(&db_path, "agricultural_machinery", 1), 0);
}

#[test]
fn test_machinery_yes_with_zero_quantities_writes_nothing() {
    let db_path = setup_test_db("machinery_yes_zero");
    init_db_with_holder(&db_path);

    let payload = temp_json(
        "machinery_yes_zero",
        r#"[
            {"has_item":"Y","equipment_name":"Tractors (below 100 horsepower)",
             "quantity_new":0,"quantity_used":0,"quantity_out_of_service":0,"source":"O"}
        ]"#,
    );

    ac().args([
        "--db", &db_path, "save", "1", "--section", "4", "--file", &payload,
    ])
    .assert()
    .success()
    .stderr(contains("please enter quantities"));

    assert_eq!(holder_rows(&db_path, "agricultural_machinery", 1), 0);

    // load still serves the untouched catalog defaults
    ac().args(["--db", &db_path, "load", "1", "--section", "4", "--json"])
        .assert()
        .success()
        .stdout(contains("Open Entry 1"));
}

#[test]
fn test_out_of_range_quantity_never_reaches_persistence() {
    let db_path = setup_test_db("machinery_out_of_range");
    init_db_with_holder(&db_path);

    let payload = temp_json(
        "machinery_out_of_range",
        r#"[
            {"has_item":"Y","equipment_name":"Trucks (including pickups)",
             "quantity_new":21,"quantity_used":0,"quantity_out_of_service":0,"source":"O"}
        ]"#,
    );

    ac().args([
        "--db", &db_path, "save", "1", "--section", "4", "--file", &payload,
    ])
    .assert()
    .success()
    .stderr(contains("must be between 0 and 20"));

    assert_eq!(holder_rows(&db_path, "agricultural_machinery", 1), 0);
}

#[test]
fn test_labour_defaults_seeded_and_totals_recomputed() {
    let db_path = setup_test_db("labour_defaults");
    init_db_with_holder(&db_path);

    // first load serves the six default questions
    ac().args(["--db", &db_path, "load", "1", "--section", "2", "--json"])
        .assert()
        .success()
        .stdout(contains("permanent workers"))
        .stdout(contains("work permits"));

    let payload = temp_json(
        "labour_defaults",
        r#"[
            {"question_no":2,"male_count":3,"female_count":4},
            {"question_no":5,"option_response":"Yes"}
        ]"#,
    );

    ac().args([
        "--db", &db_path, "save", "1", "--section", "2", "--file", &payload,
    ])
    .assert()
    .success()
    .stdout(contains("Holding Labour saved (2 rows)"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let total: i64 = conn
        .query_row(
            "SELECT total_count FROM holding_labour WHERE holder_id = 1 AND question_no = 2",
            [],
            |row| row.get(0),
        )
        .expect("total");
    assert_eq!(total, 7);
}

#[test]
fn test_permanent_workers_save_marks_section_complete() {
    let db_path = setup_test_db("permanent_autocomplete");
    init_db_with_holder(&db_path);

    let payload = temp_json(
        "permanent_autocomplete",
        r#"[
            {"position_title":"2","sex":"F","age_group":"3","nationality":"B",
             "education_level":"4","agri_training":"Y","main_duties":"3","working_time":"F"}
        ]"#,
    );

    ac().args([
        "--db", &db_path, "save", "1", "--section", "3", "--file", &payload,
    ])
    .assert()
    .success()
    .stdout(contains("Permanent Workers saved (1 rows)"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let completed: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM holder_survey_progress
             WHERE holder_id = 1 AND section_no = 3 AND completed = 1",
            [],
            |row| row.get(0),
        )
        .expect("completed");
    assert_eq!(completed, 1);
}

#[test]
fn test_permanent_worker_bad_code_is_rejected() {
    let db_path = setup_test_db("permanent_bad_code");
    init_db_with_holder(&db_path);

    let payload = temp_json(
        "permanent_bad_code",
        r#"[
            {"position_title":"2","sex":"X","age_group":"3","nationality":"B",
             "education_level":"4","agri_training":"Y","main_duties":"3","working_time":"F"}
        ]"#,
    );

    ac().args([
        "--db", &db_path, "save", "1", "--section", "3", "--file", &payload,
    ])
    .assert()
    .success()
    .stderr(contains("invalid sex code 'X'"));

    assert_eq!(holder_rows(&db_path, "holding_labour_permanent", 1), 0);
}

#[test]
fn test_answer_wizard_completes_labour_section() {
    let db_path = setup_test_db("answer_wizard");
    init_db_with_holder(&db_path);

    ac().args([
        "--db", &db_path, "answer", "1", "--question", "2", "--male", "3", "--female", "1",
    ])
    .assert()
    .success()
    .stdout(contains("Recorded answer to Q2"));

    ac().args([
        "--db", &db_path, "answer", "1", "--question", "7", "--response", "No",
    ])
    .assert()
    .success()
    .stdout(contains("Holding Labour section complete"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let total: i64 = conn
        .query_row(
            "SELECT total_count FROM holding_labour WHERE holder_id = 1 AND question_no = 2",
            [],
            |row| row.get(0),
        )
        .expect("total");
    assert_eq!(total, 4);

    let completed: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM holder_survey_progress
             WHERE holder_id = 1 AND section_no = 2 AND completed = 1",
            [],
            |row| row.get(0),
        )
        .expect("completed");
    assert_eq!(completed, 1);
}

#[test]
fn test_answer_rejects_bad_response() {
    let db_path = setup_test_db("answer_bad_response");
    init_db_with_holder(&db_path);

    ac().args([
        "--db", &db_path, "answer", "1", "--question", "5", "--response", "Maybe",
    ])
    .assert()
    .success()
    .stderr(contains("must be one of Yes, No, Not Applicable"));

    assert_eq!(holder_rows(&db_path, "holding_labour", 1), 0);
}

#[test]
fn test_land_use_developed_over_total_is_rejected() {
    let db_path = setup_test_db("land_use_developed");
    init_db_with_holder(&db_path);

    let payload = temp_json(
        "land_use_developed",
        r#"{
            "total_area_acres": 10.0, "years_agriculture": 2.0,
            "main_purpose": "For Sale Only/Commercial", "num_parcels": 1,
            "location": "Andros", "crop_methods": ["Open Field"],
            "parcels": [
                {"parcel_no":1,"total_acres":10.0,"developed_acres":15.0,
                 "tenure":"Privately Owned","use_of_land":"Temporary Crops",
                 "irrigated_area":0.0,"land_clearing":"Hand Clearing"}
            ]
        }"#,
    );

    ac().args([
        "--db", &db_path, "save", "1", "--section", "5", "--file", &payload,
    ])
    .assert()
    .success()
    .stderr(contains("Developed Acres"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let main_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM land_use", [], |row| row.get(0))
        .expect("count");
    assert_eq!(main_rows, 0);
}

#[test]
fn test_land_use_blank_location_is_rejected() {
    let db_path = setup_test_db("land_use_blank_location");
    init_db_with_holder(&db_path);

    let payload = temp_json(
        "land_use_blank_location",
        r#"{
            "total_area_acres": 10.0, "years_agriculture": 2.0,
            "main_purpose": "For Sale Only/Commercial", "num_parcels": 1,
            "location": "   ", "crop_methods": ["Open Field"],
            "parcels": [
                {"parcel_no":1,"total_acres":10.0,"developed_acres":4.0,
                 "tenure":"Privately Owned","use_of_land":"Temporary Crops",
                 "irrigated_area":0.0,"land_clearing":"Hand Clearing"}
            ]
        }"#,
    );

    ac().args([
        "--db", &db_path, "save", "1", "--section", "5", "--file", &payload,
    ])
    .assert()
    .success()
    .stderr(contains("Location cannot be empty"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let main_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM land_use", [], |row| row.get(0))
        .expect("count");
    assert_eq!(main_rows, 0);
}

#[test]
fn test_land_use_irrigated_over_total_warns_but_saves() {
    let db_path = setup_test_db("land_use_irrigated");
    init_db_with_holder(&db_path);

    let payload = temp_json(
        "land_use_irrigated",
        r#"{
            "total_area_acres": 10.0, "years_agriculture": 2.0,
            "main_purpose": "For Sale Only/Commercial", "num_parcels": 1,
            "location": "Andros", "crop_methods": ["Open Field"],
            "parcels": [
                {"parcel_no":1,"total_acres":10.0,"developed_acres":4.0,
                 "tenure":"Privately Owned","use_of_land":"Temporary Crops",
                 "irrigated_area":12.0,"land_clearing":"Hand Clearing"}
            ]
        }"#,
    );

    ac().args([
        "--db", &db_path, "save", "1", "--section", "5", "--file", &payload,
    ])
    .assert()
    .success()
    .stdout(contains("Irrigated Area"))
    .stdout(contains("Land Use saved"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let parcels: i64 = conn
        .query_row("SELECT COUNT(*) FROM land_use_parcels", [], |row| row.get(0))
        .expect("count");
    assert_eq!(parcels, 1);
}
