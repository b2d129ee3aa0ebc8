//! Path-safe token transport encoding
//!
//! Capability tokens travel inside URL path segments, and the raw JWT
//! encoding contains `.` separators. We substitute `.` with `~`: the
//! tilde is an RFC 3986 unreserved character and is absent from the
//! base64url alphabet, so the substitution is lossless in both
//! directions. This is cosmetic transport shaping, not encryption.

/// Encode a token for use as a URL path segment.
pub fn encode(token: &str) -> String {
    token.replace('.', "~")
}

/// Decode a path-segment token back to its wire form.
pub fn decode(segment: &str) -> String {
    segment.replace('~', ".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::TokenCodec;
    use chrono::Duration;

    #[test]
    fn test_roundtrip_is_lossless_for_real_tokens() {
        let codec = TokenCodec::new("transport-secret");
        let token = codec
            .issue("user@example.com", Some("verify"), Duration::minutes(15))
            .unwrap();

        let encoded = encode(&token);
        assert!(!encoded.contains('.'));
        assert_eq!(decode(&encoded), token);
    }

    #[test]
    fn test_encoded_form_verifies_after_decode() {
        let codec = TokenCodec::new("transport-secret");
        let token = codec
            .issue("user@example.com", None, Duration::minutes(5))
            .unwrap();

        let claims = codec.verify(&decode(&encode(&token))).unwrap();
        assert_eq!(claims.sub, "user@example.com");
    }

    #[test]
    fn test_base64url_hyphens_survive() {
        // base64url payloads may legitimately contain '-' and '_';
        // the tilde substitution must leave them untouched.
        let wire = "ab-c_d.ef-g_h.ij-k_l";
        assert_eq!(decode(&encode(wire)), wire);
    }
}
