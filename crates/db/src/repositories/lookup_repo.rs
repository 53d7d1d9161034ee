//! Read-only access to the dropdown master tables.

use sqlx::PgPool;

/// Name lists for form dropdowns. Only active rows are returned.
pub struct LookupRepo;

impl LookupRepo {
    /// Active site engineer names.
    pub async fn site_engineers(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT engineer_name FROM site_engineers WHERE is_active ORDER BY engineer_name",
        )
        .fetch_all(pool)
        .await
    }

    /// Active project incharge names.
    pub async fn project_incharges(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT incharge_name FROM project_incharges WHERE is_active ORDER BY incharge_name",
        )
        .fetch_all(pool)
        .await
    }

    /// Active equipment names.
    pub async fn equipment_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT equipment_name FROM equipment_master WHERE is_active ORDER BY equipment_name",
        )
        .fetch_all(pool)
        .await
    }
}
