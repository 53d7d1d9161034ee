//! Request-gating extractors.

pub mod auth;
