//! Adperk session/entitlement token core
//!
//! One signed-token primitive carries three distinct trust problems:
//! - session tokens (stateless authentication, cookie-borne)
//! - capability tokens (one-time email verification / password reset)
//! - cooldown/validity tokens (ad-click windows, plan expiry)
//!
//! The codec is pure; all state lives with the callers.

pub mod backend;
pub mod claims;
pub mod codec;
pub mod config;
pub mod context;
pub mod error;
pub mod extractors;
pub mod session;
pub mod transport;
pub mod types;

pub use backend::AuthBackend;
pub use claims::{purpose, Claims};
pub use codec::{TokenCodec, TokenError};
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::{AdminUser, SessionUser};
pub use session::{clear_session_cookie, session_cookie, SESSION_COOKIE};
pub use types::{AuthIdentity, UserRole};
