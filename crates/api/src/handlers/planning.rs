//! Planning submission handler.

use axum::extract::State;
use axum::Json;
use fieldtrack_core::error::CoreError;
use fieldtrack_db::models::project::PlanningSubmission;
use fieldtrack_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::Ack;
use crate::state::AppState;

/// POST /api/planning
///
/// Write the schedule and assignment fields, transition the project to
/// `Scheduled`, and append one `Planning` activity -- atomically.
pub async fn submit_planning(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<PlanningSubmission>,
) -> AppResult<Json<Ack>> {
    let applied = ProjectRepo::submit_planning(&state.pool, &input, auth.user.user_id).await?;
    if !applied {
        return Err(AppError::Core(CoreError::NotFound { entity: "Project" }));
    }

    tracing::info!(
        project_id = input.project_id,
        actor = auth.user.user_id,
        "Planning submitted"
    );

    Ok(Json(Ack::ok("Planning submitted successfully")))
}
