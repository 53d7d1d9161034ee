//! Repository for the `projects` table.

use fieldtrack_core::status::{StatusFilter, SCHEDULED_STATUS};
use fieldtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::ActivityType;
use crate::models::project::{CreateProject, PlanningSubmission, Project};
use crate::repositories::ActivityRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, job_number, party_name, sales_order, status, salesman, \
                        order_type, assigned_to, start_date, end_date, site_engineer, \
                        project_incharge, kml_file, created_at";

/// Project reads plus the planning submission transaction.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (job_number, party_name, sales_order, status, salesman, \
                                   order_type, assigned_to)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.job_number)
            .bind(&input.party_name)
            .bind(&input.sales_order)
            .bind(&input.status)
            .bind(&input.salesman)
            .bind(&input.order_type)
            .bind(&input.assigned_to)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects, newest first, optionally restricted to a status
    /// bucket and a search term matched against job number, party name,
    /// and sales order.
    ///
    /// Four fixed query variants; the status bucket is bound as an array
    /// parameter, never interpolated into the SQL text.
    pub async fn list(
        pool: &PgPool,
        filter: Option<StatusFilter>,
        search: Option<&str>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let statuses: Option<Vec<String>> =
            filter.map(|f| f.labels().iter().map(|s| s.to_string()).collect());
        let pattern = search
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{s}%"));

        match (statuses, pattern) {
            (Some(statuses), Some(pattern)) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM projects
                     WHERE status = ANY($1)
                       AND (job_number ILIKE $2 OR party_name ILIKE $2 OR sales_order ILIKE $2)
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Project>(&query)
                    .bind(&statuses)
                    .bind(&pattern)
                    .fetch_all(pool)
                    .await
            }
            (Some(statuses), None) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM projects
                     WHERE status = ANY($1)
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Project>(&query)
                    .bind(&statuses)
                    .fetch_all(pool)
                    .await
            }
            (None, Some(pattern)) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM projects
                     WHERE job_number ILIKE $1 OR party_name ILIKE $1 OR sales_order ILIKE $1
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Project>(&query)
                    .bind(&pattern)
                    .fetch_all(pool)
                    .await
            }
            (None, None) => {
                let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
                sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
            }
        }
    }

    /// Apply a planning submission: write the schedule and assignment
    /// fields, force the status to `Scheduled`, and append one `Planning`
    /// activity -- all in a single transaction.
    ///
    /// Returns `false` (with nothing written) if the project does not
    /// exist.
    pub async fn submit_planning(
        pool: &PgPool,
        input: &PlanningSubmission,
        actor: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE projects
             SET start_date = $2, end_date = $3, site_engineer = $4,
                 project_incharge = $5, kml_file = $6, status = $7
             WHERE id = $1",
        )
        .bind(input.project_id)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.site_engineer)
        .bind(&input.project_incharge)
        .bind(&input.kml_file)
        .bind(SCHEDULED_STATUS)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            // Unknown project: dropping the transaction rolls back.
            return Ok(false);
        }

        ActivityRepo::insert(
            &mut tx,
            input.project_id,
            ActivityType::Planning,
            "Project planning submitted",
            actor,
        )
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
