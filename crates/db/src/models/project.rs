//! Project entity model and DTOs.

use chrono::NaiveDate;
use fieldtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub job_number: String,
    pub party_name: String,
    pub sales_order: String,
    pub status: String,
    pub salesman: Option<String>,
    pub order_type: Option<String>,
    pub assigned_to: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub site_engineer: Option<String>,
    pub project_incharge: Option<String>,
    pub kml_file: Option<String>,
    pub created_at: Timestamp,
}

/// Planning submission payload: schedule, assignments, and the uploaded
/// geo-file reference. Applying it also forces the project status to
/// `Scheduled`.
#[derive(Debug, Deserialize)]
pub struct PlanningSubmission {
    pub project_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub site_engineer: String,
    pub project_incharge: String,
    pub kml_file: String,
}

/// DTO for inserting a project (test fixtures and import tooling).
pub struct CreateProject {
    pub job_number: String,
    pub party_name: String,
    pub sales_order: String,
    pub status: String,
    pub salesman: Option<String>,
    pub order_type: Option<String>,
    pub assigned_to: Option<String>,
}
