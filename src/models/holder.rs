use serde::Serialize;

/// A survey respondent (farm operator). Created on registration or
/// backfilled from a user account; never deleted by this tool.
#[derive(Debug, Clone, Serialize)]
pub struct Holder {
    pub id: i64,
    pub name: String,
    pub location: String,   // ⇔ holders.location (TEXT, default '')
    pub owner_id: Option<i64>, // ⇔ holders.owner_id (user account, nullable)
    pub status: String,     // ⇔ holders.status ('active' | 'pending' | 'approved')
    pub submitted_at: String, // ⇔ holders.submitted_at (TEXT, ISO8601)
}

pub const STATUS_ACTIVE: &str = "active";
