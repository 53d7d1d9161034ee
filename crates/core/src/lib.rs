//! Shared domain types for the fieldtrack backend.

pub mod error;
pub mod status;
pub mod types;
