//! Repository for the `user_sessions` table.

use sqlx::PgPool;

use crate::models::session::{CreateSession, Session};
use crate::models::user::UserContext;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, session_token, issued_at, expires_at";

/// Session-token lifecycle: issuance at login, the validation join, and
/// explicit or lazy removal.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_sessions (user_id, session_token, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.user_id)
            .bind(&input.session_token)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Resolve a token to its acting user.
    ///
    /// Only succeeds for a non-expired session whose owning user is still
    /// active; everything else is `None`.
    pub async fn find_user_context(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<UserContext>, sqlx::Error> {
        sqlx::query_as::<_, UserContext>(
            "SELECT u.id AS user_id, u.username, u.email, u.role, u.profile_name
             FROM user_sessions us
             JOIN users u ON u.id = us.user_id
             WHERE us.session_token = $1
               AND us.expires_at > NOW()
               AND u.is_active",
        )
        .bind(token)
        .fetch_optional(pool)
        .await
    }

    /// Find a session row by token regardless of expiry.
    pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_sessions WHERE session_token = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Delete the session for a token. Idempotent: deleting an unknown
    /// token is not an error.
    pub async fn delete_by_token(pool: &PgPool, token: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE session_token = $1")
            .bind(token)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete all expired sessions. Returns the count of deleted rows.
    ///
    /// There is no background sweeper; login calls this opportunistically
    /// to keep the table from growing without bound.
    pub async fn prune_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE expires_at <= NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
