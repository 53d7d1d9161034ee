//! Project activity audit model.
//!
//! Activities are the append-only audit trail: exactly one row per
//! planning or progress submission. No `updated_at` -- rows are immutable.

use fieldtrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Kind of audited event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Planning,
    Progress,
}

impl ActivityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Progress => "Progress",
        }
    }
}

/// A single audit record.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectActivity {
    pub id: DbId,
    pub project_id: DbId,
    pub activity_type: String,
    pub description: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
}
