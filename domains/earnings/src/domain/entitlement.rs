//! Plan entitlement evaluation
//!
//! A plan assignment is live only while its validity token verifies.
//! Evaluation is pure; callers clear stale assignments through the
//! repository.

use crate::domain::EarnError;
use adperk_auth::{purpose, TokenCodec, TokenError};
use chrono::Duration;

/// Outcome of evaluating a user's plan assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entitlement {
    /// Assignment present and the validity token verifies
    Active,
    /// Assignment present but the token is missing, expired, or bad;
    /// the assignment should be cleared
    Stale,
    /// No plan assigned
    None,
}

/// Evaluate a stored plan assignment against its validity token.
pub fn evaluate(
    codec: &TokenCodec,
    plan_id: Option<uuid::Uuid>,
    plan_token: Option<&str>,
) -> Entitlement {
    if plan_id.is_none() {
        return Entitlement::None;
    }

    match plan_token {
        Some(token) => match codec.verify(token) {
            Ok(claims) if claims.is_for(purpose::PLAN) => Entitlement::Active,
            Ok(_) | Err(_) => Entitlement::Stale,
        },
        None => Entitlement::Stale,
    }
}

/// Strict purchase gate: the balance must exceed the price.
pub fn check_purchase(balance: i64, price: i64) -> Result<(), EarnError> {
    if balance > price {
        Ok(())
    } else {
        Err(EarnError::InsufficientBalance)
    }
}

/// Mint a validity token for a freshly purchased plan.
pub fn mint_validity(
    codec: &TokenCodec,
    email: &str,
    validity_days: i32,
) -> Result<String, TokenError> {
    codec.issue(
        email,
        Some(purpose::PLAN),
        Duration::days(i64::from(validity_days.max(1))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn codec() -> TokenCodec {
        TokenCodec::new("entitlement-secret")
    }

    #[test]
    fn test_no_plan_is_none() {
        assert_eq!(evaluate(&codec(), None, None), Entitlement::None);
    }

    #[test]
    fn test_live_token_is_active() {
        let codec = codec();
        let token = mint_validity(&codec, "user@example.com", 1).unwrap();
        assert_eq!(
            evaluate(&codec, Some(Uuid::new_v4()), Some(&token)),
            Entitlement::Active
        );
    }

    #[test]
    fn test_expired_token_is_stale() {
        let codec = codec();
        let token = codec
            .issue(
                "user@example.com",
                Some(purpose::PLAN),
                Duration::seconds(-60),
            )
            .unwrap();
        assert_eq!(
            evaluate(&codec, Some(Uuid::new_v4()), Some(&token)),
            Entitlement::Stale
        );
    }

    #[test]
    fn test_missing_token_is_stale() {
        assert_eq!(
            evaluate(&codec(), Some(Uuid::new_v4()), None),
            Entitlement::Stale
        );
    }

    #[test]
    fn test_wrong_purpose_is_stale() {
        let codec = codec();
        let token = codec
            .issue("user@example.com", Some(purpose::VERIFY), Duration::days(1))
            .unwrap();
        assert_eq!(
            evaluate(&codec, Some(Uuid::new_v4()), Some(&token)),
            Entitlement::Stale
        );
    }

    #[test]
    fn test_purchase_requires_strictly_greater_balance() {
        assert!(check_purchase(100, 60).is_ok());
        assert!(matches!(
            check_purchase(60, 60),
            Err(EarnError::InsufficientBalance)
        ));
        assert!(matches!(
            check_purchase(59, 60),
            Err(EarnError::InsufficientBalance)
        ));
    }
}
