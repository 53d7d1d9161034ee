//! Route definitions for the authentication endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// POST /login             -> login
/// POST /validate-session  -> validate_session
/// POST /logout            -> logout (requires auth)
/// POST /change-password   -> change_password (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/validate-session", post(auth::validate_session))
        .route("/logout", post(auth::logout))
        .route("/change-password", post(auth::change_password))
}
