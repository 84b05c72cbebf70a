use crate::db::pool::DbPool;
use crate::models::section::Section;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) HOLDERS
    //
    let holders: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM holders", [], |row| row.get(0))?;
    println!(
        "{}• Holders:{} {}{}{}",
        CYAN, RESET, GREEN, holders, RESET
    );

    //
    // 3) RESPONSE ROWS PER SECTION
    //
    for section in Section::ALL {
        let Some(table) = section.table() else {
            continue;
        };
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
        println!(
            "{}• {} rows:{} {}",
            CYAN,
            section.title(),
            RESET,
            count
        );
    }

    //
    // 4) COMPLETED SECTION FACTS
    //
    let completed: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM holder_survey_progress WHERE completed = 1",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Completed sections:{} {}", CYAN, RESET, completed);

    //
    // 5) REGISTRATION RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT submitted_at FROM holders ORDER BY submitted_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT submitted_at FROM holders ORDER BY submitted_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Registrations:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
