//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No session token present on the request
    #[error("authentication required")]
    Unauthorized,
    /// Signature mismatch or malformed token
    #[error("invalid session token")]
    InvalidToken,
    /// Structurally valid token past its expiry
    #[error("session token expired")]
    TokenExpired,
    /// Token subject no longer resolves to a user
    #[error("user not found")]
    UserNotFound,
    /// Role gate rejection (admin-only route)
    #[error("admin access required")]
    Forbidden,
    /// Storage failure while resolving the identity
    #[error("failed to load user")]
    UserLoadError,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required",
            ),
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid session token",
            ),
            AuthError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                "TOKEN_EXPIRED",
                "Session expired, please log in again",
            ),
            AuthError::UserNotFound => {
                (StatusCode::UNAUTHORIZED, "USER_NOT_FOUND", "User not found")
            }
            AuthError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Admin access required",
            ),
            AuthError::UserLoadError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "USER_LOAD_ERROR",
                "Failed to load user",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status_codes() {
        let cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AuthError::TokenExpired, StatusCode::UNAUTHORIZED),
            (AuthError::UserNotFound, StatusCode::UNAUTHORIZED),
            (AuthError::Forbidden, StatusCode::FORBIDDEN),
            (AuthError::UserLoadError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_auth_error_displays_for_log_formatting() {
        // Session-issue failures are folded into Internal error strings,
        // so every variant must render through Display.
        assert_eq!(
            format!("Failed to issue session token: {}", AuthError::InvalidToken),
            "Failed to issue session token: invalid session token"
        );
        assert_eq!(AuthError::TokenExpired.to_string(), "session token expired");
        assert_eq!(AuthError::Forbidden.to_string(), "admin access required");
    }
}
