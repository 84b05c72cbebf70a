use crate::db::holders;
use crate::db::log::aclog;
use crate::db::pool::DbPool;
use crate::db::progress;
use crate::errors::AppResult;
use crate::models::holder::{Holder, STATUS_ACTIVE};

/// A holder together with its survey progress fraction.
#[derive(Debug)]
pub struct HolderProgress {
    pub holder: Holder,
    pub done: u32,
    pub total: u32,
}

pub struct HolderLogic;

impl HolderLogic {
    /// Register a new holder (active, timestamped now) and audit it.
    pub fn register(
        pool: &mut DbPool,
        name: &str,
        location: &str,
        owner_id: Option<i64>,
    ) -> AppResult<Holder> {
        let holder = holders::insert_holder(&pool.conn, name, location, owner_id, STATUS_ACTIVE)?;

        aclog(
            &pool.conn,
            "register",
            &holder.id.to_string(),
            &format!("Registered holder '{}'", holder.name),
        )?;

        Ok(holder)
    }

    /// All holders with their completed-section counts.
    pub fn list_with_progress(pool: &mut DbPool, total: u32) -> AppResult<Vec<HolderProgress>> {
        let mut out = Vec::new();

        for holder in holders::list_holders(&pool.conn)? {
            let done = progress::get_completed(&pool.conn, holder.id)?.len() as u32;
            out.push(HolderProgress { holder, done, total });
        }

        Ok(out)
    }

    /// Create holder records for user accounts with the Holder role that do
    /// not have one yet. Returns the number of holders created.
    pub fn backfill(pool: &mut DbPool) -> AppResult<usize> {
        let users = holders::holder_users(&pool.conn)?;

        let mut created = 0;
        for (user_id, username) in users {
            if holders::find_holder_by_owner(&pool.conn, user_id)?.is_some() {
                continue;
            }

            let holder =
                holders::insert_holder(&pool.conn, &username, "", Some(user_id), STATUS_ACTIVE)?;
            aclog(
                &pool.conn,
                "register",
                &holder.id.to_string(),
                &format!("Backfilled holder '{}' from user {}", username, user_id),
            )?;
            created += 1;
        }

        Ok(created)
    }
}
