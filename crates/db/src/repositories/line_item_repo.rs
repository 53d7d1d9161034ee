//! Repository for the `sales_order_items` and `delivery_note_items`
//! tables. The two tables are structurally identical; every query takes a
//! [`LineItemKind`] selecting which one to target.

use fieldtrack_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::line_item::{CreateLineItem, LineItem, LineItemKind};
use crate::models::progress::ProgressDelta;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, stock_code, description, unit, quantity, \
                        installed_quantity, balance_quantity, last_updated";

/// Line-item reads plus the per-row delta applier used by the progress
/// transaction.
pub struct LineItemRepo;

impl LineItemRepo {
    /// Insert a new line item with nothing installed yet.
    pub async fn create(
        pool: &PgPool,
        kind: LineItemKind,
        input: &CreateLineItem,
    ) -> Result<LineItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (project_id, stock_code, description, unit, quantity, \
                                  balance_quantity)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COLUMNS}",
            table = kind.table()
        );
        sqlx::query_as::<_, LineItem>(&query)
            .bind(input.project_id)
            .bind(&input.stock_code)
            .bind(&input.description)
            .bind(&input.unit)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// List a project's line items ordered by stock code.
    pub async fn list_for_project(
        pool: &PgPool,
        kind: LineItemKind,
        project_id: DbId,
    ) -> Result<Vec<LineItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE project_id = $1 ORDER BY stock_code",
            table = kind.table()
        );
        sqlx::query_as::<_, LineItem>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find one line item by (project, stock code).
    pub async fn find(
        pool: &PgPool,
        kind: LineItemKind,
        project_id: DbId,
        stock_code: &str,
    ) -> Result<Option<LineItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE project_id = $1 AND stock_code = $2",
            table = kind.table()
        );
        sqlx::query_as::<_, LineItem>(&query)
            .bind(project_id)
            .bind(stock_code)
            .fetch_optional(pool)
            .await
    }

    /// Apply one installed-quantity delta inside an existing transaction.
    ///
    /// Increments `installed_quantity`, recomputes `balance_quantity =
    /// quantity - installed_quantity`, and stamps `last_updated`. A delta
    /// whose stock code matches no row updates nothing; the caller treats
    /// that as a skip, not an error.
    pub async fn apply_delta(
        tx: &mut Transaction<'_, Postgres>,
        kind: LineItemKind,
        project_id: DbId,
        delta: &ProgressDelta,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "UPDATE {table}
             SET installed_quantity = installed_quantity + $1,
                 balance_quantity = quantity - (installed_quantity + $1),
                 last_updated = NOW()
             WHERE project_id = $2 AND stock_code = $3",
            table = kind.table()
        );
        let result = sqlx::query(&query)
            .bind(delta.today_installed)
            .bind(project_id)
            .bind(&delta.stock_code)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
