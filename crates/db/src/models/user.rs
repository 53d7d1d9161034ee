//! User entity model and DTOs.
//!
//! Users are provisioned out-of-band; the API reads them for login and
//! session validation and only ever writes `password_hash`.

use fieldtrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// Use [`UserContext`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub profile_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub last_password_change: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Identity of the acting user, resolved from a valid session.
///
/// This is the `userData` payload of the validate-session endpoint and the
/// attribution source for planning/progress writes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserContext {
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub profile_name: String,
}

/// DTO for inserting a user (test fixtures and provisioning tooling).
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub role: String,
    pub profile_name: String,
    pub password_hash: String,
}
