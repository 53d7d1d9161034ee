//! Session model and DTOs.

use fieldtrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `user_sessions` table.
///
/// A session is valid iff `expires_at` is in the future and the owning
/// user is still active; expired rows are pruned lazily.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub session_token: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

/// DTO for creating a new session at login.
pub struct CreateSession {
    pub user_id: DbId,
    pub session_token: String,
    pub expires_at: Timestamp,
}
