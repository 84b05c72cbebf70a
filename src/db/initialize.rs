use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use crate::models::section::Section;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine, then
/// verifies that every section response table actually came out of it.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;

    for section in Section::ALL {
        let Some(table) = section.table() else {
            continue;
        };

        let found: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )?;

        if found == 0 {
            return Err(AppError::Migration(format!(
                "census table '{}' missing after migration",
                table
            )));
        }
    }

    Ok(())
}
