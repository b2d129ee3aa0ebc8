//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Deployment environment. Controls the `Secure` flag on session cookies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Cooldown window profile for ad-click grants.
///
/// Exactly one profile is active per deployment; the window never mixes
/// within a running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CooldownProfile {
    /// One-minute window (demo/testing deployments)
    Short,
    /// Twenty-four-hour window
    Daily,
}

impl CooldownProfile {
    /// Window length in seconds
    pub fn window_secs(&self) -> i64 {
        match self {
            Self::Short => 60,
            Self::Daily => 24 * 60 * 60,
        }
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "short" => Self::Short,
            _ => Self::Daily,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Shared secret for signing session/capability/cooldown tokens
    pub jwt_secret: String,

    /// Session token lifetime in days (cookie max-age matches)
    pub session_ttl_days: i64,

    /// Verification token lifetime in minutes
    pub verify_ttl_minutes: i64,

    /// Password-reset token lifetime in minutes
    pub reset_ttl_minutes: i64,

    /// Ad-click cooldown deployment profile
    pub cooldown_profile: CooldownProfile,

    /// Base URL of the client app (activation/reset links)
    pub client_base_url: String,

    /// Runtime configuration
    pub app_env: AppEnv,
    pub log_level: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,

            session_ttl_days: env::var("SESSION_TTL_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .unwrap_or(7),
            verify_ttl_minutes: env::var("VERIFY_TTL_MINUTES")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .unwrap_or(15),
            reset_ttl_minutes: env::var("RESET_TTL_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),

            cooldown_profile: CooldownProfile::parse(
                &env::var("COOLDOWN_PROFILE").unwrap_or_else(|_| "daily".to_string()),
            ),

            client_base_url: env::var("CLIENT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),

            app_env: AppEnv::parse(&env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_profile_windows() {
        assert_eq!(CooldownProfile::Short.window_secs(), 60);
        assert_eq!(CooldownProfile::Daily.window_secs(), 86_400);
    }

    #[test]
    fn test_cooldown_profile_parse_defaults_to_daily() {
        assert_eq!(CooldownProfile::parse("short"), CooldownProfile::Short);
        assert_eq!(CooldownProfile::parse("daily"), CooldownProfile::Daily);
        assert_eq!(CooldownProfile::parse("anything"), CooldownProfile::Daily);
    }

    #[test]
    fn test_app_env_parse() {
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("prod"), AppEnv::Production);
        assert_eq!(AppEnv::parse("development"), AppEnv::Development);
        assert_eq!(AppEnv::parse(""), AppEnv::Development);
    }
}
