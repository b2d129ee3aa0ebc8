//! Ad-click cooldown guard
//!
//! A grant is live while its embedded token verifies. Liveness is
//! evaluated lazily on touch; the repository reaps dead rows with the
//! same conditional statement that claims new ones.

use adperk_auth::{purpose, TokenCodec, TokenError};
use adperk_common::CooldownProfile;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Liveness of a cooldown grant token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantState {
    /// Token still verifies; the ad stays claimed
    OnCooldown,
    /// Token expired or failed verification; the ad is claimable again
    Eligible,
}

/// Classify a grant token. Any verification failure means eligible;
/// a broken token must never lock an ad permanently.
pub fn grant_state(codec: &TokenCodec, token: &str) -> GrantState {
    match codec.verify(token) {
        Ok(claims) if claims.is_for(purpose::COOLDOWN) => GrantState::OnCooldown,
        Ok(_) | Err(_) => GrantState::Eligible,
    }
}

/// Mint a cooldown token for the configured window.
///
/// The subject binds the ad id alongside the user, so grants claimed
/// by one user against different ads never collide even when minted
/// within the same second.
pub fn mint_grant_token(
    codec: &TokenCodec,
    email: &str,
    ad_id: Uuid,
    profile: CooldownProfile,
) -> Result<String, TokenError> {
    let subject = format!("{}/{}", email, ad_id);
    codec.issue(&subject, Some(purpose::COOLDOWN), window(profile))
}

/// Expiry instant for a grant claimed now.
pub fn grant_expiry(profile: CooldownProfile, now: DateTime<Utc>) -> DateTime<Utc> {
    now + window(profile)
}

fn window(profile: CooldownProfile) -> Duration {
    Duration::seconds(profile.window_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new("cooldown-secret")
    }

    #[test]
    fn test_fresh_grant_is_on_cooldown() {
        let codec = codec();
        let token =
            mint_grant_token(&codec, "user@example.com", Uuid::new_v4(), CooldownProfile::Daily)
                .unwrap();
        assert_eq!(grant_state(&codec, &token), GrantState::OnCooldown);
    }

    #[test]
    fn test_same_second_grants_for_different_ads_are_distinct() {
        let codec = codec();
        let a = mint_grant_token(&codec, "user@example.com", Uuid::new_v4(), CooldownProfile::Daily)
            .unwrap();
        let b = mint_grant_token(&codec, "user@example.com", Uuid::new_v4(), CooldownProfile::Daily)
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_expired_grant_is_eligible() {
        let codec = codec();
        let token = codec
            .issue(
                "user@example.com",
                Some(purpose::COOLDOWN),
                Duration::seconds(-1),
            )
            .unwrap();
        assert_eq!(grant_state(&codec, &token), GrantState::Eligible);
    }

    #[test]
    fn test_garbage_token_is_eligible() {
        assert_eq!(grant_state(&codec(), "not-a-token"), GrantState::Eligible);
    }

    #[test]
    fn test_session_token_is_not_a_grant() {
        let codec = codec();
        let token = codec
            .issue("user@example.com", None, Duration::days(7))
            .unwrap();
        assert_eq!(grant_state(&codec, &token), GrantState::Eligible);
    }

    #[test]
    fn test_expiry_matches_profile_window() {
        let now = Utc::now();
        assert_eq!(
            grant_expiry(CooldownProfile::Short, now) - now,
            Duration::seconds(60)
        );
        assert_eq!(
            grant_expiry(CooldownProfile::Daily, now) - now,
            Duration::seconds(86_400)
        );
    }
}
