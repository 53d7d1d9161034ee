//! Route definitions for the dropdown option endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::options;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET /dropdown-options  -> dropdown_options
/// GET /equipment-list    -> equipment_list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dropdown-options", get(options::dropdown_options))
        .route("/equipment-list", get(options::equipment_list))
}
