//! Repository for the append-only `project_activities` audit trail.

use fieldtrack_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::activity::{ActivityType, ProjectActivity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, activity_type, description, created_by, created_at";

/// Insert-and-list access to project activities. Rows are never updated
/// or deleted.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Append one activity row inside an existing transaction.
    ///
    /// Planning and progress submissions call this exactly once per
    /// batch, so the audit trail commits or rolls back with the rest of
    /// the unit of work.
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        project_id: DbId,
        activity_type: ActivityType,
        description: &str,
        actor: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO project_activities (project_id, activity_type, description, created_by)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(project_id)
        .bind(activity_type.as_str())
        .bind(description)
        .bind(actor)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// List a project's activities, oldest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectActivity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_activities
             WHERE project_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, ProjectActivity>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
