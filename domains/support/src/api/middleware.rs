//! Support domain state and auth backend integration

use crate::SupportRepositories;
use adperk_auth::AuthBackend;
use axum::extract::FromRef;

/// Application state for the Support domain
#[derive(Clone)]
pub struct SupportState {
    pub repos: SupportRepositories,
    pub auth: AuthBackend,
}

impl FromRef<SupportState> for AuthBackend {
    fn from_ref(state: &SupportState) -> Self {
        state.auth.clone()
    }
}
