//! Line-item model shared by sales-order and delivery-note items.
//!
//! The two tables are structurally identical; [`LineItemKind`] selects
//! which one a query targets.

use fieldtrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Which line-item table a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemKind {
    SalesOrder,
    DeliveryNote,
}

impl LineItemKind {
    /// Table name for this kind. A fixed two-variant mapping, never
    /// derived from request input.
    pub fn table(self) -> &'static str {
        match self {
            Self::SalesOrder => "sales_order_items",
            Self::DeliveryNote => "delivery_note_items",
        }
    }
}

/// A line item row. Invariant: `balance_quantity = quantity -
/// installed_quantity` after every mutation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LineItem {
    pub id: DbId,
    pub project_id: DbId,
    pub stock_code: String,
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub installed_quantity: f64,
    pub balance_quantity: f64,
    pub last_updated: Option<Timestamp>,
}

/// DTO for inserting a line item (test fixtures and import tooling).
/// `installed_quantity` starts at zero and `balance_quantity` at
/// `quantity`.
pub struct CreateLineItem {
    pub project_id: DbId,
    pub stock_code: String,
    pub description: String,
    pub unit: String,
    pub quantity: f64,
}
