//! User repository
//!
//! Runtime-checked queries against the `users` table. One-time
//! capability redemption is enforced here with conditional updates:
//! the row mutates only when the stored pending marker matches the
//! presented token.

use crate::domain::entities::User;
use adperk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, name, user_name, email, password_hash, role, verified, \
                            balance, mobile, address, photo, pending_token, created_at, updated_at";

/// Fields required to insert a new user.
pub struct NewUser {
    pub name: String,
    pub user_name: String,
    pub email: String,
    pub password_hash: String,
    pub pending_token: String,
}

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an unverified user with its initial verification marker.
    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let user: User = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (id, name, user_name, email, password_hash, role,
                               verified, balance, pending_token, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 'user', FALSE, 0, $6, NOW(), NOW())
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&new_user.name)
        .bind(&new_user.user_name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.pending_token)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user: Option<User> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user: Option<User> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    /// Find user by user name (referral lookup)
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_name = $1"
        ))
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Whether a user name is already taken
    pub async fn user_name_exists(&self, user_name: &str) -> Result<bool> {
        let row: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE user_name = $1")
            .bind(user_name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// List all users (admin view)
    pub async fn list_all(&self) -> Result<Vec<User>> {
        let users: Vec<User> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Update user profile (name, mobile, address)
    pub async fn update_profile(
        &self,
        id: Uuid,
        name: Option<String>,
        mobile: Option<String>,
        address: Option<String>,
    ) -> Result<Option<User>> {
        let updated: Option<User> = sqlx::query_as(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                mobile = COALESCE($3, mobile),
                address = COALESCE($4, address),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(mobile)
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Replace the pending capability marker (verification resend, reset issue).
    pub async fn set_pending_token(&self, email: &str, token: &str) -> Result<()> {
        sqlx::query("UPDATE users SET pending_token = $2, updated_at = NOW() WHERE email = $1")
            .bind(email)
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Flip the verified flag iff the presented token matches the stored
    /// marker, clearing the marker. Returns false when the marker was
    /// absent or superseded (token already consumed).
    pub async fn mark_verified(&self, email: &str, presented_token: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET verified = TRUE, pending_token = NULL, updated_at = NOW()
            WHERE email = $1 AND pending_token = $2
            "#,
        )
        .bind(email)
        .bind(presented_token)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Set a new password iff the presented reset token matches the
    /// stored marker, clearing the marker.
    pub async fn reset_password(
        &self,
        email: &str,
        presented_token: &str,
        new_password_hash: &str,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $3, pending_token = NULL, updated_at = NOW()
            WHERE email = $1 AND pending_token = $2
            "#,
        )
        .bind(email)
        .bind(presented_token)
        .bind(new_password_hash)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Update password for a logged-in user (old password already checked)
    pub async fn update_password(&self, id: Uuid, new_password_hash: &str) -> Result<()> {
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(new_password_hash)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete a user
    pub async fn delete(&self, id: Uuid) -> Result<Option<User>> {
        let deleted: Option<User> = sqlx::query_as(&format!(
            "DELETE FROM users WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted)
    }
}
