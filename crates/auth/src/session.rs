//! Session cookie shaping
//!
//! The token itself is the session state; the server holds no copy.
//! Logout is purely a client-side cookie clear.

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::AuthConfig;

/// Cookie name carrying the session token
pub const SESSION_COOKIE: &str = "accessToken";

/// Build the HTTP-only session cookie for a freshly minted token.
pub fn session_cookie(token: String, config: &AuthConfig) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_secure(config.secure_cookies);
    cookie.set_max_age(time::Duration::days(config.session_ttl_days));
    cookie
}

/// Build an immediately-expiring cookie that clears the session.
pub fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::ZERO);
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secure: bool) -> AuthConfig {
        AuthConfig {
            jwt_secret: "secret".to_string(),
            session_ttl_days: 7,
            secure_cookies: secure,
        }
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok".to_string(), &config(true));
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));
    }

    #[test]
    fn test_secure_flag_tracks_environment() {
        let cookie = session_cookie("tok".to_string(), &config(false));
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}
