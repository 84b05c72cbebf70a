use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the census tables with the modern schema.
fn create_census_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            username  TEXT NOT NULL UNIQUE,
            role      TEXT NOT NULL DEFAULT 'Holder'
        );

        CREATE TABLE IF NOT EXISTS holders (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            location     TEXT NOT NULL DEFAULT '',
            owner_id     INTEGER,
            status       TEXT NOT NULL DEFAULT 'active'
                         CHECK(status IN ('active','pending','approved')),
            submitted_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS holder_survey_progress (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            holder_id  INTEGER NOT NULL REFERENCES holders(id),
            section_no INTEGER NOT NULL,
            completed  INTEGER NOT NULL DEFAULT 0
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_progress_holder_section
            ON holder_survey_progress(holder_id, section_no);

        CREATE TABLE IF NOT EXISTS holding_labour (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            holder_id       INTEGER NOT NULL REFERENCES holders(id),
            question_no     INTEGER NOT NULL,
            question_text   TEXT NOT NULL,
            male_count      INTEGER NOT NULL DEFAULT 0,
            female_count    INTEGER NOT NULL DEFAULT 0,
            total_count     INTEGER NOT NULL DEFAULT 0,
            option_response TEXT NOT NULL DEFAULT 'Not Applicable'
        );

        CREATE INDEX IF NOT EXISTS idx_labour_holder
            ON holding_labour(holder_id, question_no);

        CREATE TABLE IF NOT EXISTS holding_labour_permanent (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            holder_id       INTEGER NOT NULL REFERENCES holders(id),
            position_title  TEXT NOT NULL,
            sex             TEXT NOT NULL,
            age_group       TEXT NOT NULL,
            nationality     TEXT NOT NULL,
            education_level TEXT NOT NULL,
            agri_training   TEXT NOT NULL,
            main_duties     TEXT NOT NULL,
            working_time    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_permanent_holder
            ON holding_labour_permanent(holder_id);

        CREATE TABLE IF NOT EXISTS agricultural_machinery (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            holder_id               INTEGER NOT NULL REFERENCES holders(id),
            has_item                TEXT NOT NULL DEFAULT 'N' CHECK(has_item IN ('Y','N')),
            equipment_name          TEXT NOT NULL,
            quantity_new            INTEGER NOT NULL DEFAULT 0,
            quantity_used           INTEGER NOT NULL DEFAULT 0,
            quantity_out_of_service INTEGER NOT NULL DEFAULT 0,
            source                  TEXT NOT NULL DEFAULT 'O' CHECK(source IN ('O','RL','B'))
        );

        CREATE INDEX IF NOT EXISTS idx_machinery_holder
            ON agricultural_machinery(holder_id);

        CREATE TABLE IF NOT EXISTS land_use (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            holder_id        INTEGER NOT NULL UNIQUE REFERENCES holders(id),
            total_area_acres REAL NOT NULL,
            years_agriculture REAL NOT NULL DEFAULT 0,
            main_purpose     TEXT NOT NULL,
            num_parcels      INTEGER NOT NULL,
            location         TEXT NOT NULL,
            crop_methods     TEXT NOT NULL DEFAULT '[]'
        );

        CREATE TABLE IF NOT EXISTS land_use_parcels (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            land_use_id    INTEGER NOT NULL REFERENCES land_use(id),
            parcel_no      INTEGER NOT NULL,
            total_acres    REAL NOT NULL,
            developed_acres REAL NOT NULL DEFAULT 0,
            tenure         TEXT NOT NULL,
            use_of_land    TEXT NOT NULL,
            irrigated_area REAL NOT NULL DEFAULT 0,
            land_clearing  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_parcels_land_use
            ON land_use_parcels(land_use_id, parcel_no);
        "#,
    )?;
    Ok(())
}

/// Add holders.location for databases created before the field existed.
/// Tracked through the log table so it only runs once.
fn migrate_add_holder_location(conn: &Connection) -> Result<()> {
    let version = "20250818_0001_add_holder_location";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if !column_exists(conn, "holders", "location")? {
        conn.execute(
            "ALTER TABLE holders ADD COLUMN location TEXT NOT NULL DEFAULT '';",
            [],
        )?;

        success(format!(
            "Migration applied: {} → added 'location' to holders table",
            version
        ));
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added location column to holders')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base census schema
    let fresh = !table_exists(conn, "holders")?;
    create_census_tables(conn)?;
    if fresh {
        success("Created census tables (modern schema).");
    }

    // 3) Tracked column migrations for pre-existing databases
    migrate_add_holder_location(conn)?;

    Ok(())
}
