//! Route definition for the planning submission endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::planning;
use crate::state::AppState;

/// Routes mounted at `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/planning", post(planning::submit_planning))
}
