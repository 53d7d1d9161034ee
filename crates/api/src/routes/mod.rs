pub mod auth;
pub mod health;
pub mod options;
pub mod planning;
pub mod progress;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                login (public)
/// /validate-session     validate a token (public)
/// /logout               logout (requires auth)
/// /change-password      change password (requires auth)
///
/// /projects             list projects (requires auth)
/// /project/{id}         project detail (requires auth)
///
/// /planning             planning submission (requires auth)
/// /work-progress        progress submission (requires auth)
///
/// /dropdown-options     form dropdowns (requires auth)
/// /equipment-list       equipment names (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(projects::router())
        .merge(planning::router())
        .merge(progress::router())
        .merge(options::router())
}
