//! SHA-256 password digests and verification.
//!
//! The credential store holds 64-hex-character SHA-256 digests. Users are
//! provisioned out-of-band with the same format, so login and password
//! change both reduce to digest comparison.

use sha2::{Digest, Sha256};

/// Compute the hex-encoded SHA-256 digest of a plaintext password.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Verify a plaintext password against a stored digest.
///
/// The comparison is constant-time over the two digests.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    constant_time_eq(hash_password(password).as_bytes(), stored_hash.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
