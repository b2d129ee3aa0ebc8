//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns the identity read query.
//! Uses runtime `sqlx::query_as` for the cross-domain read model.

use chrono::Duration;
use sqlx::PgPool;

use crate::codec::{TokenCodec, TokenError};
use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::types::AuthIdentity;

/// Concrete authentication backend.
///
/// Holds the database pool, auth configuration, and the token codec.
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
    codec: TokenCodec,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        let codec = TokenCodec::new(&config.jwt_secret);
        Self {
            pool,
            config,
            codec,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// The shared token codec, for callers minting capability,
    /// cooldown, or validity tokens.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Mint a session token for a logged-in user.
    pub fn issue_session(&self, email: &str) -> Result<String, AuthError> {
        self.codec
            .issue(email, None, Duration::days(self.config.session_ttl_days))
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Find the identity projection by email (password hash excluded).
    pub async fn find_identity(&self, email: &str) -> Result<Option<AuthIdentity>, AuthError> {
        let user: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, name, user_name, email, role,
                   verified, balance, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to load user identity");
            AuthError::UserLoadError
        })?;

        Ok(user)
    }

    /// Validate an inbound session token and resolve it to a user.
    pub async fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = self.codec.verify(token).map_err(|e| match e {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid => AuthError::InvalidToken,
        })?;

        // A purpose-bound token is not a session.
        if claims.purpose.is_some() {
            return Err(AuthError::InvalidToken);
        }

        let user = self
            .find_identity(&claims.sub)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthContext::new(user))
    }
}
