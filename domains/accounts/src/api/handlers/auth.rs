//! Authentication API handlers
//!
//! Implements registration, login, logout, email verification, and
//! password reset:
//! - POST /v1/auth/register and /v1/auth/register/{reference}
//! - POST /v1/auth/login, /v1/auth/admin
//! - GET /v1/auth/logOut
//! - GET /v1/auth/login/{token} - Verify account by emailed link
//! - POST /v1/auth/resendToken, /v1/auth/forgotPass
//! - POST /v1/auth/resetPass/{token}
//! - GET /v1/auth/loggedInUser, /v1/auth/loggedInAdmin

use crate::api::handlers::users::UserResponse;
use crate::api::middleware::AccountsState;
use crate::repository::users::NewUser;
use adperk_auth::{purpose, AdminUser, SessionUser, TokenError, UserRole};
use adperk_auth::{clear_session_cookie, session_cookie};
use adperk_common::{hash_password, verify_password, Error, Result, MIN_PASSWORD_LENGTH};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Referral commissions start at zero and are settled by an admin.
const REFERRAL_COMMISSION: i64 = 0;

/// Request for user registration
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 3, max = 50))]
    pub user_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6))]
    pub password: String,
}

/// Request for login (user and admin)
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Request carrying only an email address (resend, forgot password)
#[derive(Debug, Deserialize, Validate)]
pub struct EmailRequest {
    #[validate(email)]
    pub email: String,
}

/// Request for resetting a password via an emailed token
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub user: UserResponse,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Lowercase the user name and replace whitespace runs with dashes so
/// it is usable as a referral path segment.
fn dashed_user_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// POST /v1/auth/register and /v1/auth/register/{reference}
///
/// Creates an unverified account, records a pending referral commission
/// when the reference resolves to an existing user, and sends the
/// activation mail. Mail delivery failures are logged, never surfaced.
pub async fn register(
    State(state): State<AccountsState>,
    reference: Option<Path<String>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    if state
        .repos
        .users
        .find_by_email(&request.email)
        .await?
        .is_some()
    {
        return Err(Error::Conflict("Email already exists".to_string()));
    }

    let user_name = dashed_user_name(&request.user_name);
    if state.repos.users.user_name_exists(&user_name).await? {
        return Err(Error::Conflict("User name already exists".to_string()));
    }

    // Referral commission only for a resolvable referrer
    if let Some(Path(reference)) = reference {
        if let Some(referrer) = state.repos.users.find_by_user_name(&reference).await? {
            state
                .repos
                .commissions
                .create(&referrer.user_name, &user_name, REFERRAL_COMMISSION)
                .await?;
        }
    }

    let password_hash = hash_password(&request.password)?;

    let issue = state
        .capability
        .issue_verification(&request.email)
        .map_err(|e| Error::Internal(format!("Failed to issue verification token: {}", e)))?;

    let user = state
        .repos
        .users
        .create(NewUser {
            name: request.name.clone(),
            user_name,
            email: request.email.clone(),
            password_hash,
            pending_token: issue.token,
        })
        .await?;

    if let Err(e) = state
        .email
        .send_account_activation(&user.email, &user.name, &issue.code, &issue.link)
        .await
    {
        tracing::warn!(error = %e, email = %user.email, "Failed to send activation mail");
    }

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: UserResponse::from(user),
            message: "Registration successful, check your mail for verification".to_string(),
        }),
    ))
}

/// POST /v1/auth/login
pub async fn login(
    State(state): State<AccountsState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let user = state
        .repos
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(Error::Authentication("Wrong password".to_string()));
    }

    if !user.verified {
        return Err(Error::Authentication(
            "Please verify your email address".to_string(),
        ));
    }

    let token = state
        .auth
        .issue_session(&user.email)
        .map_err(|e| Error::Internal(format!("Failed to issue session token: {}", e)))?;

    let jar = jar.add(session_cookie(token.clone(), state.auth.config()));

    Ok((
        jar,
        Json(LoginResponse {
            token,
            user: UserResponse::from(user),
            message: "User login successful".to_string(),
        }),
    ))
}

/// POST /v1/auth/admin - Admin login
pub async fn admin_login(
    State(state): State<AccountsState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let user = state
        .repos
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    if user.role != UserRole::Admin {
        return Err(Error::Authorization("Not authorized".to_string()));
    }

    if !verify_password(&request.password, &user.password_hash) {
        return Err(Error::Authentication("Wrong password".to_string()));
    }

    let token = state
        .auth
        .issue_session(&user.email)
        .map_err(|e| Error::Internal(format!("Failed to issue session token: {}", e)))?;

    let jar = jar.add(session_cookie(token.clone(), state.auth.config()));

    Ok((
        jar,
        Json(LoginResponse {
            token,
            user: UserResponse::from(user),
            message: "Admin login successful".to_string(),
        }),
    ))
}

/// GET /v1/auth/logOut
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.add(clear_session_cookie()),
        Json(MessageResponse::new("Logout successful")),
    )
}

/// GET /v1/auth/login/{token} - Verify an account from the emailed link
///
/// The token is consumed on first use: the conditional update clears
/// the stored marker, so replaying the same link fails.
pub async fn verify_account(
    State(state): State<AccountsState>,
    Path(segment): Path<String>,
) -> Result<Json<VerifyResponse>> {
    let (token, claims) = state
        .capability
        .redeem(&segment, purpose::VERIFY)
        .map_err(|e| match e {
            TokenError::Expired => Error::Authentication("Verification link expired".to_string()),
            _ => Error::Validation("Invalid verification token".to_string()),
        })?;

    let consumed = state.repos.users.mark_verified(&claims.sub, &token).await?;
    if !consumed {
        return Err(Error::Validation(
            "Verification link already used or superseded".to_string(),
        ));
    }

    let user = state
        .repos
        .users
        .find_by_email(&claims.sub)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = %user.id, "Account verified");

    Ok(Json(VerifyResponse {
        user: UserResponse::from(user),
        message: "User activation successful".to_string(),
    }))
}

/// POST /v1/auth/resendToken
///
/// Responds identically whether or not the address is registered.
pub async fn resend_verification(
    State(state): State<AccountsState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<MessageResponse>> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    if let Some(user) = state.repos.users.find_by_email(&request.email).await? {
        if !user.verified {
            let issue = state
                .capability
                .issue_verification(&user.email)
                .map_err(|e| {
                    Error::Internal(format!("Failed to issue verification token: {}", e))
                })?;

            state
                .repos
                .users
                .set_pending_token(&user.email, &issue.token)
                .await?;

            if let Err(e) = state
                .email
                .send_account_activation(&user.email, &user.name, &issue.code, &issue.link)
                .await
            {
                tracing::warn!(error = %e, email = %user.email, "Failed to send activation mail");
            }
        }
    }

    Ok(Json(MessageResponse::new("Verification mail sent")))
}

/// POST /v1/auth/forgotPass
///
/// Responds identically whether or not the address is registered.
pub async fn forgot_password(
    State(state): State<AccountsState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<MessageResponse>> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    if let Some(user) = state.repos.users.find_by_email(&request.email).await? {
        let issue = state
            .capability
            .issue_reset(&user.email)
            .map_err(|e| Error::Internal(format!("Failed to issue reset token: {}", e)))?;

        state
            .repos
            .users
            .set_pending_token(&user.email, &issue.token)
            .await?;

        if let Err(e) = state
            .email
            .send_password_reset(&user.email, &user.name, &issue.link)
            .await
        {
            tracing::warn!(error = %e, email = %user.email, "Failed to send reset mail");
        }
    }

    Ok(Json(MessageResponse::new("Password reset mail sent")))
}

/// POST /v1/auth/resetPass/{token}
pub async fn reset_password(
    State(state): State<AccountsState>,
    Path(segment): Path<String>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>> {
    if request.password.len() < MIN_PASSWORD_LENGTH {
        return Err(Error::Validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }

    let (token, claims) = state
        .capability
        .redeem(&segment, purpose::RESET)
        .map_err(|e| match e {
            TokenError::Expired => Error::Authentication("Reset link expired".to_string()),
            _ => Error::Validation("Invalid reset token".to_string()),
        })?;

    let new_hash = hash_password(&request.password)?;

    let consumed = state
        .repos
        .users
        .reset_password(&claims.sub, &token, &new_hash)
        .await?;
    if !consumed {
        return Err(Error::Validation(
            "Reset link already used or superseded".to_string(),
        ));
    }

    Ok(Json(MessageResponse::new("Password reset successful")))
}

/// GET /v1/auth/loggedInUser
pub async fn logged_in_user(SessionUser(auth_context): SessionUser) -> Json<adperk_auth::AuthIdentity> {
    Json(auth_context.user)
}

/// GET /v1/auth/loggedInAdmin
pub async fn logged_in_admin(AdminUser(auth_context): AdminUser) -> Json<adperk_auth::AuthIdentity> {
    Json(auth_context.user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_user_name_normalizes() {
        assert_eq!(dashed_user_name("Jane Doe"), "jane-doe");
        assert_eq!(dashed_user_name("  spaced   out  "), "spaced-out");
        assert_eq!(dashed_user_name("plain"), "plain");
    }

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            name: "Jane".to_string(),
            user_name: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_password = RegisterRequest {
            password: "abc".to_string(),
            ..valid
        };
        assert!(short_password.validate().is_err());

        let bad_email = RegisterRequest {
            name: "Jane".to_string(),
            user_name: "jane".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        assert!(bad_email.validate().is_err());
    }
}
