//! Route definition for the work-progress submission endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/work-progress", post(progress::submit_progress))
}
