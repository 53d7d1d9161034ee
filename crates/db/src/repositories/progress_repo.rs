//! The work-progress reconciliation transaction.

use fieldtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::ActivityType;
use crate::models::line_item::LineItemKind;
use crate::models::progress::ProgressSubmission;
use crate::repositories::{ActivityRepo, LineItemRepo};

/// Applies a whole progress submission as one unit of work.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Apply a progress submission: increment installed quantities on both
    /// line-item collections, append the manpower and equipment rows, and
    /// append exactly one `Progress` activity for the batch.
    ///
    /// Everything runs in a single transaction; a failure partway through
    /// leaves the stored state untouched. Deltas whose stock code matches
    /// no row are skipped. Returns `false` (with nothing written) if the
    /// project does not exist.
    pub async fn submit(
        pool: &PgPool,
        input: &ProgressSubmission,
        actor: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM projects WHERE id = $1)")
            .bind(input.project_id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            return Ok(false);
        }

        for delta in &input.so_line_items {
            let matched =
                LineItemRepo::apply_delta(&mut tx, LineItemKind::SalesOrder, input.project_id, delta)
                    .await?;
            if matched == 0 {
                tracing::debug!(
                    project_id = input.project_id,
                    stock_code = %delta.stock_code,
                    "sales-order delta matched no row, skipping"
                );
            }
        }

        for delta in &input.dn_line_items {
            let matched = LineItemRepo::apply_delta(
                &mut tx,
                LineItemKind::DeliveryNote,
                input.project_id,
                delta,
            )
            .await?;
            if matched == 0 {
                tracing::debug!(
                    project_id = input.project_id,
                    stock_code = %delta.stock_code,
                    "delivery-note delta matched no row, skipping"
                );
            }
        }

        for manpower in &input.manpower {
            sqlx::query(
                "INSERT INTO manpower_entries (project_id, source, quantity, created_by)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(input.project_id)
            .bind(&manpower.source)
            .bind(manpower.quantity)
            .bind(actor)
            .execute(&mut *tx)
            .await?;
        }

        for equipment in &input.equipment {
            sqlx::query(
                "INSERT INTO equipment_entries \
                     (project_id, equipment_name, source, quantity, cost, created_by)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(input.project_id)
            .bind(&equipment.name)
            .bind(&equipment.source)
            .bind(equipment.quantity)
            .bind(equipment.cost)
            .bind(actor)
            .execute(&mut *tx)
            .await?;
        }

        // One activity per batch, not one per line item.
        ActivityRepo::insert(
            &mut tx,
            input.project_id,
            ActivityType::Progress,
            "Work progress updated",
            actor,
        )
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
