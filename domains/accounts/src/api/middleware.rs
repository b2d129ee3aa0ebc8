//! Accounts domain state and auth backend integration

use crate::domain::capability::CapabilityIssuer;
use crate::AccountsRepositories;
use adperk_auth::AuthBackend;
use adperk_email::EmailService;
use axum::extract::FromRef;
use std::sync::Arc;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub repos: AccountsRepositories,
    pub auth: AuthBackend,
    pub email: Arc<dyn EmailService>,
    pub capability: CapabilityIssuer,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
