//! Opaque session-token generation.
//!
//! Tokens are 32 bytes from a cryptographically secure generator,
//! hex-encoded to 64 characters, and stored server-side with a fixed
//! expiry. They carry no structure; validation is a database lookup.

use rand::RngCore;

/// Session lifetime from issuance.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Generate a new session token: 256 bits of CSPRNG entropy, hex-encoded.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_64_hex_chars() {
        let token = generate_session_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = generate_session_token();
        let b = generate_session_token();
        assert_ne!(a, b);
    }
}
