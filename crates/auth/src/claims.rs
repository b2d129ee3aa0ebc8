//! Signed-token claims

use serde::{Deserialize, Serialize};

/// Well-known values for the `purpose` claim.
///
/// Session tokens carry no purpose; every other token names the single
/// action it grants.
pub mod purpose {
    /// Email-verification capability token
    pub const VERIFY: &str = "verify";
    /// Password-reset capability token
    pub const RESET: &str = "reset";
    /// Ad-click cooldown grant token
    pub const COOLDOWN: &str = "cooldown";
    /// Plan validity token
    pub const PLAN: &str = "plan";
}

/// Decoded payload of a signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
    /// Purpose binding; absent for session tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl Claims {
    /// Whether this token is bound to the given purpose.
    pub fn is_for(&self, expected: &str) -> bool {
        self.purpose.as_deref() == Some(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_for_matches_purpose() {
        let claims = Claims {
            sub: "user@example.com".to_string(),
            iat: 0,
            exp: 0,
            purpose: Some(purpose::VERIFY.to_string()),
        };
        assert!(claims.is_for(purpose::VERIFY));
        assert!(!claims.is_for(purpose::RESET));
    }

    #[test]
    fn test_session_claims_have_no_purpose() {
        let claims = Claims {
            sub: "user@example.com".to_string(),
            iat: 0,
            exp: 0,
            purpose: None,
        };
        assert!(!claims.is_for(purpose::VERIFY));
    }
}
