//! Authentication configuration

/// Configuration for the token core, injected at construction.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared signing secret (never rotated at runtime)
    pub jwt_secret: String,
    /// Session token + cookie lifetime in days
    pub session_ttl_days: i64,
    /// Whether session cookies carry the `Secure` flag
    pub secure_cookies: bool,
}
