//! Ledger domain state and auth backend integration

use crate::LedgerRepositories;
use adperk_auth::AuthBackend;
use axum::extract::FromRef;

/// Application state for the Ledger domain
#[derive(Clone)]
pub struct LedgerState {
    pub repos: LedgerRepositories,
    pub auth: AuthBackend,
}

impl FromRef<LedgerState> for AuthBackend {
    fn from_ref(state: &LedgerState) -> Self {
        state.auth.clone()
    }
}
