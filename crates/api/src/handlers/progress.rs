//! Work-progress submission handler.

use axum::extract::State;
use axum::Json;
use fieldtrack_core::error::CoreError;
use fieldtrack_db::models::progress::ProgressSubmission;
use fieldtrack_db::repositories::ProgressRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::Ack;
use crate::state::AppState;

/// POST /api/work-progress
///
/// Apply a batched progress submission: line-item deltas, manpower and
/// equipment usage, and one `Progress` activity, in a single transaction.
pub async fn submit_progress(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<ProgressSubmission>,
) -> AppResult<Json<Ack>> {
    let applied = ProgressRepo::submit(&state.pool, &input, auth.user.user_id).await?;
    if !applied {
        return Err(AppError::Core(CoreError::NotFound { entity: "Project" }));
    }

    tracing::info!(
        project_id = input.project_id,
        actor = auth.user.user_id,
        so_deltas = input.so_line_items.len(),
        dn_deltas = input.dn_line_items.len(),
        manpower = input.manpower.len(),
        equipment = input.equipment.len(),
        "Work progress submitted"
    );

    Ok(Json(Ack::ok("Work progress updated successfully")))
}
