//! Dropdown option handlers for the planning and progress forms.

use axum::extract::State;
use axum::Json;
use fieldtrack_db::repositories::LookupRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response for `GET /api/dropdown-options`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownOptions {
    pub site_engineers: Vec<String>,
    pub project_incharges: Vec<String>,
}

/// GET /api/dropdown-options
pub async fn dropdown_options(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<DropdownOptions>> {
    let site_engineers = LookupRepo::site_engineers(&state.pool).await?;
    let project_incharges = LookupRepo::project_incharges(&state.pool).await?;

    Ok(Json(DropdownOptions {
        site_engineers,
        project_incharges,
    }))
}

/// GET /api/equipment-list
///
/// Bare array of active equipment names.
pub async fn equipment_list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<String>>> {
    let names = LookupRepo::equipment_names(&state.pool).await?;
    Ok(Json(names))
}
