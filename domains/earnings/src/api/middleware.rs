//! Earnings domain state and auth backend integration

use crate::EarningsRepositories;
use adperk_auth::AuthBackend;
use adperk_common::CooldownProfile;
use axum::extract::FromRef;

/// Application state for the Earnings domain
#[derive(Clone)]
pub struct EarningsState {
    pub repos: EarningsRepositories,
    pub auth: AuthBackend,
    /// Active cooldown window; exactly one profile per deployment
    pub cooldown_profile: CooldownProfile,
}

impl FromRef<EarningsState> for AuthBackend {
    fn from_ref(state: &EarningsState) -> Self {
        state.auth.clone()
    }
}
