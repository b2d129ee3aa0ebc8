//! Adperk application composition root
//!
//! Composes all domain routers into a single application under the
//! `/api` prefix.

use adperk_accounts::{AccountsRepositories, AccountsState, CapabilityIssuer};
use adperk_auth::{AuthBackend, AuthConfig};
use adperk_common::{AppEnv, Config};
use adperk_earnings::{EarningsRepositories, EarningsState};
use adperk_email::{EmailConfig, EmailServiceFactory};
use adperk_ledger::{LedgerRepositories, LedgerState};
use adperk_support::{SupportRepositories, SupportState};
use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        session_ttl_days: config.session_ttl_days,
        secure_cookies: config.app_env == AppEnv::Production,
    };
    let auth = AuthBackend::new(pool.clone(), auth_config);

    let email_config = EmailConfig::from_env()?;
    let email_service = EmailServiceFactory::create(email_config).await?;

    let capability = CapabilityIssuer::new(
        auth.codec().clone(),
        config.client_base_url.clone(),
        config.verify_ttl_minutes,
        config.reset_ttl_minutes,
    );

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
        email: Arc::from(email_service),
        capability,
    };

    let earnings_state = EarningsState {
        repos: EarningsRepositories::new(pool.clone()),
        auth: auth.clone(),
        cooldown_profile: config.cooldown_profile,
    };

    let ledger_state = LedgerState {
        repos: LedgerRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let support_state = SupportState {
        repos: SupportRepositories::new(pool),
        auth,
    };

    // Domain routers all mount under /api
    let api = Router::new()
        .merge(adperk_accounts::routes().with_state(accounts_state))
        .merge(adperk_earnings::routes().with_state(earnings_state))
        .merge(adperk_ledger::routes().with_state(ledger_state))
        .merge(adperk_support::routes().with_state(support_state));

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Adperk API" }))
        .nest("/api", api);

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
