//! Domain layer for the Earnings domain
//!
//! Pure entitlement and cooldown decisions live here so they can be
//! tested without a database; the repository layer applies them
//! atomically.

pub mod entities;
pub mod entitlement;
pub mod guard;

use thiserror::Error;

/// Failures surfaced by plan purchase and ad-click earning.
#[derive(Debug, Error)]
pub enum EarnError {
    #[error("You have no plan")]
    NoPlan,

    #[error("You have already purchased a plan")]
    AlreadyOwned,

    #[error("Plan is not available")]
    PlanNotFound,

    #[error("Ad unit not found")]
    AdNotFound,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("You have already claimed this ad")]
    AlreadyClaimed,

    #[error("Plan has no usable per-click reward")]
    ServerMisconfigured,
}

#[cfg(test)]
mod tests {
    use super::entitlement::{self, Entitlement};
    use super::guard::{self, GrantState};
    use adperk_auth::TokenCodec;
    use adperk_common::CooldownProfile;
    use uuid::Uuid;

    // Full purchase-then-earn walk against the pure decision layer:
    // a 100-balance user buys a 60-price one-day plan with a 5-reward,
    // earns once, and is blocked from an immediate second claim.
    #[test]
    fn test_purchase_then_earn_walkthrough() {
        let codec = TokenCodec::new("walkthrough-secret");
        let mut balance: i64 = 100;
        let price: i64 = 60;
        let reward: i64 = 5;

        entitlement::check_purchase(balance, price).unwrap();
        balance -= price;
        assert_eq!(balance, 40);

        let validity = entitlement::mint_validity(&codec, "user@example.com", 1).unwrap();
        assert_eq!(
            entitlement::evaluate(&codec, Some(Uuid::new_v4()), Some(&validity)),
            Entitlement::Active
        );

        let grant = guard::mint_grant_token(
            &codec,
            "user@example.com",
            Uuid::new_v4(),
            CooldownProfile::Daily,
        )
        .unwrap();
        balance += reward;
        assert_eq!(balance, 45);

        // Second claim inside the window: grant still live
        assert_eq!(guard::grant_state(&codec, &grant), GrantState::OnCooldown);

        // Holding a live plan blocks a second purchase
        assert_eq!(
            entitlement::evaluate(&codec, Some(Uuid::new_v4()), Some(&validity)),
            Entitlement::Active
        );
    }
}
