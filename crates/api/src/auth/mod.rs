//! Authentication primitives.
//!
//! - [`password`] -- SHA-256 password digests and verification.
//! - [`token`] -- opaque session-token generation and lifetime.

pub mod password;
pub mod token;
