//! Route definitions for the project read endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET /projects       -> list_projects
/// GET /project/{id}   -> project_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list_projects))
        .route("/project/{id}", get(projects::project_detail))
}
