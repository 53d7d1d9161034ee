//! Shared response envelope types for API handlers.
//!
//! Success responses carry `success: true`; use these instead of ad-hoc
//! `serde_json::json!` so serialization stays consistent.

use serde::Serialize;

/// `{"success": true, "message": ...}` acknowledgement for write endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: &'static str,
}

impl Ack {
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

/// `{"success": true, "data": [...]}` envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
