//! Capability token issuer
//!
//! Mints single-use, purpose-bound tokens for email verification and
//! password reset, along with the activation links/codes that carry
//! them. Issuance is pure; the one-time marker lives on the user row
//! and is enforced by the repository at redemption time.

use adperk_auth::{purpose, transport, Claims, TokenCodec, TokenError};
use chrono::Duration;
use rand::Rng;

/// A freshly issued email-verification capability.
#[derive(Debug, Clone)]
pub struct VerificationIssue {
    /// Six-digit code included in the activation mail
    pub code: String,
    /// Raw signed token, persisted as the pending marker
    pub token: String,
    /// Activation link embedding the transport-encoded token
    pub link: String,
}

/// A freshly issued password-reset capability.
#[derive(Debug, Clone)]
pub struct ResetIssue {
    pub token: String,
    pub link: String,
}

/// Issues and redeems capability tokens.
#[derive(Clone)]
pub struct CapabilityIssuer {
    codec: TokenCodec,
    client_base_url: String,
    verify_ttl: Duration,
    reset_ttl: Duration,
}

impl CapabilityIssuer {
    pub fn new(
        codec: TokenCodec,
        client_base_url: String,
        verify_ttl_minutes: i64,
        reset_ttl_minutes: i64,
    ) -> Self {
        Self {
            codec,
            client_base_url,
            verify_ttl: Duration::minutes(verify_ttl_minutes),
            reset_ttl: Duration::minutes(reset_ttl_minutes),
        }
    }

    /// Mint an email-verification token and its activation link/code.
    pub fn issue_verification(&self, email: &str) -> Result<VerificationIssue, TokenError> {
        let token = self
            .codec
            .issue(email, Some(purpose::VERIFY), self.verify_ttl)?;
        let link = format!("{}/login/{}", self.client_base_url, transport::encode(&token));

        Ok(VerificationIssue {
            code: activation_code(),
            token,
            link,
        })
    }

    /// Mint a password-reset token and its link.
    pub fn issue_reset(&self, email: &str) -> Result<ResetIssue, TokenError> {
        let token = self.codec.issue(email, Some(purpose::RESET), self.reset_ttl)?;
        let link = format!(
            "{}/resetpassword/{}",
            self.client_base_url,
            transport::encode(&token)
        );

        Ok(ResetIssue { token, link })
    }

    /// Decode a path-segment token, verify it, and check the purpose
    /// binding. Returns the raw wire-form token alongside the claims so
    /// the caller can compare it against the stored marker.
    pub fn redeem(
        &self,
        segment: &str,
        expected_purpose: &str,
    ) -> Result<(String, Claims), TokenError> {
        let token = transport::decode(segment);
        let claims = self.codec.verify(&token)?;

        if !claims.is_for(expected_purpose) {
            return Err(TokenError::Invalid);
        }

        Ok((token, claims))
    }
}

/// Six-digit numeric activation code for the mail body.
fn activation_code() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{:06}", n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adperk_auth::purpose;

    fn issuer() -> CapabilityIssuer {
        CapabilityIssuer::new(
            TokenCodec::new("capability-secret"),
            "https://app.example.com".to_string(),
            15,
            30,
        )
    }

    #[test]
    fn test_verification_issue_redeems_to_subject() {
        let issuer = issuer();
        let issue = issuer.issue_verification("user@example.com").unwrap();

        let segment = issue.link.rsplit('/').next().unwrap();
        let (token, claims) = issuer.redeem(segment, purpose::VERIFY).unwrap();

        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(token, issue.token);
    }

    #[test]
    fn test_links_avoid_raw_dots() {
        let issuer = issuer();
        let issue = issuer.issue_verification("user@example.com").unwrap();
        let segment = issue.link.rsplit('/').next().unwrap();
        assert!(!segment.contains('.'));

        let reset = issuer.issue_reset("user@example.com").unwrap();
        let segment = reset.link.rsplit('/').next().unwrap();
        assert!(!segment.contains('.'));
        assert!(reset.link.contains("/resetpassword/"));
    }

    #[test]
    fn test_purpose_binding_is_enforced() {
        let issuer = issuer();
        let reset = issuer.issue_reset("user@example.com").unwrap();
        let segment = reset.link.rsplit('/').next().unwrap();

        // A reset token cannot redeem as a verification token
        assert!(matches!(
            issuer.redeem(segment, purpose::VERIFY),
            Err(TokenError::Invalid)
        ));
        assert!(issuer.redeem(segment, purpose::RESET).is_ok());
    }

    #[test]
    fn test_session_token_cannot_redeem_as_capability() {
        let issuer = issuer();
        let codec = TokenCodec::new("capability-secret");
        let session = codec
            .issue("user@example.com", None, chrono::Duration::days(7))
            .unwrap();

        assert!(matches!(
            issuer.redeem(&adperk_auth::transport::encode(&session), purpose::VERIFY),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_activation_code_is_six_digits() {
        for _ in 0..32 {
            let code = activation_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
