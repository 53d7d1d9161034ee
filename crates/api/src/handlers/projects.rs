//! Read-only project listing and detail handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use fieldtrack_core::error::CoreError;
use fieldtrack_core::status::StatusFilter;
use fieldtrack_core::types::DbId;
use fieldtrack_db::models::line_item::{LineItem, LineItemKind};
use fieldtrack_db::models::project::Project;
use fieldtrack_db::repositories::{LineItemRepo, ProjectRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ListResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
}

/// Response for `GET /api/project/{id}`.
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub success: bool,
    pub project: Project,
    pub so_line_items: Vec<LineItem>,
    pub dn_line_items: Vec<LineItem>,
}

/// GET /api/projects?status=planning&search=...
///
/// The status parameter defaults to `planning`; unrecognized values list
/// all statuses.
pub async fn list_projects(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<ProjectListQuery>,
) -> AppResult<Json<ListResponse<Project>>> {
    let status = params.status.as_deref().unwrap_or("planning");
    let filter = StatusFilter::parse(status);

    let projects = ProjectRepo::list(&state.pool, filter, params.search.as_deref()).await?;
    Ok(Json(ListResponse::ok(projects)))
}

/// GET /api/project/{id}
///
/// Project detail with both line-item collections.
pub async fn project_detail(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetailResponse>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Project" }))?;

    let so_line_items =
        LineItemRepo::list_for_project(&state.pool, LineItemKind::SalesOrder, id).await?;
    let dn_line_items =
        LineItemRepo::list_for_project(&state.pool, LineItemKind::DeliveryNote, id).await?;

    Ok(Json(ProjectDetailResponse {
        success: true,
        project,
        so_line_items,
        dn_line_items,
    }))
}
