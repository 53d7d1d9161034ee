//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use fieldtrack_core::error::CoreError;
use fieldtrack_db::models::user::UserContext;
use fieldtrack_db::repositories::SessionRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the raw session token in the
/// `Authorization` header (no scheme prefix).
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Every failure mode after the header check -- unknown token, expired
/// session, deactivated user, storage error -- rejects with the same 401
/// response so callers cannot tell which case occurred.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Identity of the acting user.
    pub user: UserContext,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers)?;

        // Storage failures are logged and treated as an invalid session,
        // not surfaced as a distinct error.
        let user = match SessionRepo::find_user_context(&state.pool, &token).await {
            Ok(user) => user,
            Err(err) => {
                tracing::error!(error = %err, "Session validation failed");
                None
            }
        }
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        Ok(AuthUser { user })
    }
}

/// Read the raw session token from the `Authorization` header.
///
/// Logout uses this directly: it deletes by token without validating the
/// session first, so revoking an already-revoked token still succeeds.
pub fn session_token(headers: &axum::http::HeaderMap) -> Result<String, AppError> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Authentication required".into())))
}
