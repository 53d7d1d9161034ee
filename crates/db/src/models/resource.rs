//! Append-only resource usage models (manpower and equipment).

use fieldtrack_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A manpower usage row. Immutable once created.
#[derive(Debug, Clone, FromRow)]
pub struct ManpowerEntry {
    pub id: DbId,
    pub project_id: DbId,
    pub source: String,
    pub quantity: i32,
    pub entry_date: Timestamp,
    pub created_by: DbId,
}

/// One reported manpower usage within a progress submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateManpowerEntry {
    pub source: String,
    pub quantity: i32,
}

/// An equipment usage row. Immutable once created.
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentEntry {
    pub id: DbId,
    pub project_id: DbId,
    pub equipment_name: String,
    pub source: String,
    pub quantity: i32,
    pub cost: f64,
    pub entry_date: Timestamp,
    pub created_by: DbId,
}

/// One reported equipment usage within a progress submission.
/// The wire field for the equipment name is `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEquipmentEntry {
    pub name: String,
    pub source: String,
    pub quantity: i32,
    pub cost: f64,
}
