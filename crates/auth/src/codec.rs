//! Signed-token codec
//!
//! Symmetric HS256 signing with a process-wide secret injected at
//! construction. Expiry is strictly checked at verification time (zero
//! leeway); a tampered encoding is rejected before expiry is evaluated.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::claims::Claims;

/// Token verification/issuance failure.
///
/// `Expired` is a distinct, recoverable condition: callers holding a
/// stale grant reap it silently instead of surfacing a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token invalid")]
    Invalid,
}

/// Encodes and decodes signed, expiring claims. Pure; holds no state
/// beyond the derived keys.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        // Expiry is a hard contract for cooldown windows; no clock slack.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Mint a signed token for `subject` with the given lifetime.
    pub fn issue(
        &self,
        subject: &str,
        purpose: Option<&str>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            purpose: purpose.map(str::to_string),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Token encoding failed");
            TokenError::Invalid
        })
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => {
                    tracing::debug!(error = %e, "Token validation failed");
                    TokenError::Invalid
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::purpose;

    fn codec() -> TokenCodec {
        TokenCodec::new("test-secret")
    }

    #[test]
    fn test_issue_verify_roundtrip_returns_subject() {
        let codec = codec();
        let token = codec
            .issue("user@example.com", None, Duration::minutes(5))
            .unwrap();

        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.sub, "user@example.com");
        assert!(claims.purpose.is_none());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_purpose_survives_roundtrip() {
        let codec = codec();
        let token = codec
            .issue("user@example.com", Some(purpose::VERIFY), Duration::minutes(15))
            .unwrap();

        let claims = codec.verify(&token).unwrap();
        assert!(claims.is_for(purpose::VERIFY));
    }

    #[test]
    fn test_expired_token_fails_with_expired() {
        let codec = codec();
        let token = codec
            .issue("user@example.com", None, Duration::seconds(-5))
            .unwrap();

        assert_eq!(codec.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_token_fails_with_invalid() {
        let codec = codec();
        let token = codec
            .issue("user@example.com", None, Duration::minutes(5))
            .unwrap();

        // Flip a character in the payload segment
        let mut bytes = token.into_bytes();
        let mid = bytes.len() / 2;
        bytes[mid] = if bytes[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert_eq!(codec.verify(&tampered), Err(TokenError::Invalid));
    }

    #[test]
    fn test_tampering_beats_expiry() {
        // A tampered but long-expired token is Invalid, not Expired:
        // the signature is checked before the expiry claim is trusted.
        let codec = codec();
        let token = codec
            .issue("user@example.com", None, Duration::seconds(-5))
            .unwrap();
        let tampered = token + "x";

        assert_eq!(codec.verify(&tampered), Err(TokenError::Invalid));
    }

    #[test]
    fn test_wrong_secret_fails_with_invalid() {
        let token = codec()
            .issue("user@example.com", None, Duration::minutes(5))
            .unwrap();
        let other = TokenCodec::new("different-secret");

        assert_eq!(other.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_garbage_fails_with_invalid() {
        assert_eq!(codec().verify("not-a-token"), Err(TokenError::Invalid));
        assert_eq!(codec().verify(""), Err(TokenError::Invalid));
    }
}
