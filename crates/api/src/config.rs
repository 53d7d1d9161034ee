//! Server configuration from environment variables.

/// Runtime configuration for the HTTP server.
///
/// Every field falls back to a local-development default; deployments
/// override via the environment. `DATABASE_URL` is read separately in
/// `main.rs` because the pool is built before the router.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// | Variable               | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    ///
    /// Panics on unparseable values; a misconfigured server should not
    /// come up.
    pub fn from_env() -> Self {
        let port = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        // Comma-separated list; blank entries are dropped.
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}
