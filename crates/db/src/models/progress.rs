//! Progress submission payload.

use fieldtrack_core::types::DbId;
use serde::Deserialize;

use crate::models::resource::{CreateEquipmentEntry, CreateManpowerEntry};

/// One installed-quantity delta against a line item.
///
/// `today_installed` is additive, not absolute. Negative values are
/// accepted (corrections are a product decision still pending).
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressDelta {
    pub stock_code: String,
    pub today_installed: f64,
}

/// A batched work-progress submission for one project.
///
/// All four lists default to empty; the whole submission is applied as a
/// single transaction.
#[derive(Debug, Deserialize)]
pub struct ProgressSubmission {
    pub project_id: DbId,
    #[serde(default)]
    pub so_line_items: Vec<ProgressDelta>,
    #[serde(default)]
    pub dn_line_items: Vec<ProgressDelta>,
    #[serde(default)]
    pub manpower: Vec<CreateManpowerEntry>,
    #[serde(default)]
    pub equipment: Vec<CreateEquipmentEntry>,
}
