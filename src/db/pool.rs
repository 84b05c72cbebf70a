//! SQLite connection wrapper (lightweight for CLI usage).
//! One connection is opened per logical operation and dropped with the pool;
//! there is no long-lived transaction spanning user think-time.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
