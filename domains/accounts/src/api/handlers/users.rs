//! User management API handlers
//!
//! Implements user administration and profile operations:
//! - GET /v1/user/all - List all users (admin)
//! - PUT /v1/user/changePassword - Change own password
//! - GET /v1/user/{id} - Get a single user
//! - PUT /v1/user/{id} - Update profile fields
//! - DELETE /v1/user/{id} - Delete a user (admin)

use crate::domain::entities::User;
use adperk_auth::{AdminUser, SessionUser, UserRole};
use adperk_common::{hash_password, verify_password, Error, Result, MIN_PASSWORD_LENGTH};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;

/// Public view of a user. Never carries the password hash or the
/// pending capability marker.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
    pub verified: bool,
    pub balance: i64,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            user_name: user.user_name,
            email: user.email,
            role: user.role,
            verified: user.verified,
            balance: user.balance,
            mobile: user.mobile,
            address: user.address,
            photo: user.photo,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request for updating a user's profile
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 32))]
    pub mobile: Option<String>,

    #[validate(length(max = 512))]
    pub address: Option<String>,
}

/// Request for changing the logged-in user's password
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// GET /v1/user/all - List all users (admin only)
pub async fn list_users(
    AdminUser(_auth_context): AdminUser,
    State(state): State<AccountsState>,
) -> Result<Json<Vec<UserResponse>>> {
    let users = state.repos.users.list_all().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /v1/user/{id} - Get a single user (self or admin)
pub async fn get_user(
    SessionUser(auth_context): SessionUser,
    State(state): State<AccountsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>> {
    if auth_context.user.id != id && !auth_context.is_admin() {
        return Err(Error::Authorization(
            "Cannot view another user's profile".to_string(),
        ));
    }

    let user = state
        .repos
        .users
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /v1/user/{id} - Update profile fields (self or admin)
pub async fn update_user(
    SessionUser(auth_context): SessionUser,
    State(state): State<AccountsState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    if auth_context.user.id != id && !auth_context.is_admin() {
        return Err(Error::Authorization(
            "Cannot update another user's profile".to_string(),
        ));
    }

    let updated = state
        .repos
        .users
        .update_profile(id, request.name, request.mobile, request.address)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(updated)))
}

/// DELETE /v1/user/{id} - Delete a user (admin only)
pub async fn delete_user(
    AdminUser(_auth_context): AdminUser,
    State(state): State<AccountsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>> {
    let deleted = state
        .repos
        .users
        .delete(id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = %id, "User deleted");

    Ok(Json(UserResponse::from(deleted)))
}

/// PUT /v1/user/changePassword - Change the logged-in user's password
pub async fn change_password(
    SessionUser(auth_context): SessionUser,
    State(state): State<AccountsState>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<serde_json::Value>> {
    if request.new_password.len() < MIN_PASSWORD_LENGTH {
        return Err(Error::Validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }

    let user = state
        .repos
        .users
        .get_by_id(auth_context.user.id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    if !verify_password(&request.old_password, &user.password_hash) {
        return Err(Error::Authentication("Wrong password".to_string()));
    }

    let new_hash = hash_password(&request.new_password)?;
    state
        .repos
        .users
        .update_password(user.id, &new_hash)
        .await?;

    Ok(Json(serde_json::json!({
        "message": "Password changed successfully"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_omits_secrets() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            user_name: "test-user".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: UserRole::User,
            verified: true,
            balance: 120,
            mobile: None,
            address: None,
            photo: None,
            pending_token: Some("marker".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();

        assert!(json.contains("test@example.com"));
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("marker"));
    }

    #[test]
    fn test_update_user_validation() {
        let valid = UpdateUserRequest {
            name: Some("New Name".to_string()),
            mobile: Some("+8801700000000".to_string()),
            address: None,
        };
        assert!(valid.validate().is_ok());

        let invalid = UpdateUserRequest {
            name: Some(String::new()),
            mobile: None,
            address: None,
        };
        assert!(invalid.validate().is_err());
    }
}
