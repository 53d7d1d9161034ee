#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A requested entity does not exist. Surfaced on read paths and on
    /// planning/progress submissions against an unknown project.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Login or password-change failure. The message is deliberately
    /// generic so callers cannot tell which check failed.
    #[error("{0}")]
    InvalidCredentials(String),

    /// Missing, expired, or unknown session token. Callers receive the
    /// same response regardless of which case occurred.
    #[error("{0}")]
    Unauthorized(String),
}
