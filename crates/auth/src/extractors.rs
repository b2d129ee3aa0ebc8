//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.
//!
//! The session token is read from the `accessToken` cookie first, with
//! an `Authorization: Bearer` fallback for non-browser clients.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::session::SESSION_COOKIE;

/// Pull the session token off the request, cookie first.
fn extract_session_token(parts: &Parts) -> Result<String, AuthError> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Ok(cookie.value().to_string());
    }

    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::Unauthorized)?;
    let header_str = header.to_str().map_err(|_| AuthError::Unauthorized)?;
    header_str
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or(AuthError::Unauthorized)
}

/// Authenticated session extractor
#[derive(Debug)]
pub struct SessionUser(pub AuthContext);

impl<S> FromRequestParts<S> for SessionUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);
        let token = extract_session_token(parts)?;
        let auth_context = backend.authenticate(&token).await?;

        Ok(SessionUser(auth_context))
    }
}

/// Admin-gated session extractor.
///
/// Like `SessionUser` but rejects non-admin users with 403 FORBIDDEN.
#[derive(Debug)]
pub struct AdminUser(pub AuthContext);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let SessionUser(auth_context) = SessionUser::from_request_parts(parts, state).await?;

        if !auth_context.is_admin() {
            return Err(AuthError::Forbidden);
        }

        Ok(AdminUser(auth_context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_cookie_token_preferred() {
        let parts = parts_with_headers(&[
            ("cookie", "accessToken=cookie-token"),
            ("authorization", "Bearer header-token"),
        ]);
        assert_eq!(extract_session_token(&parts).unwrap(), "cookie-token");
    }

    #[test]
    fn test_bearer_fallback() {
        let parts = parts_with_headers(&[("authorization", "Bearer header-token")]);
        assert_eq!(extract_session_token(&parts).unwrap(), "header-token");
    }

    #[test]
    fn test_missing_token_is_unauthorized() {
        let parts = parts_with_headers(&[]);
        assert!(matches!(
            extract_session_token(&parts),
            Err(AuthError::Unauthorized)
        ));
    }

    #[test]
    fn test_non_bearer_authorization_rejected() {
        let parts = parts_with_headers(&[("authorization", "Basic abc")]);
        assert!(matches!(
            extract_session_token(&parts),
            Err(AuthError::Unauthorized)
        ));
    }
}
