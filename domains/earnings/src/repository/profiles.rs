//! Cross-domain read of user balance and plan assignment
//!
//! The user row is owned by the Accounts domain; earnings flows only
//! touch the balance and plan columns, read here as a narrow
//! projection.

use crate::domain::entities::EarnerProfile;
use adperk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<Option<EarnerProfile>> {
        let profile: Option<EarnerProfile> = sqlx::query_as(
            "SELECT id, email, balance, plan_id, plan_token FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Clear a stale plan assignment (lazy reap).
    pub async fn clear_plan(&self, user_id: Uuid) -> Result<()> {
        sqlx::query(
            "UPDATE users SET plan_id = NULL, plan_token = NULL, updated_at = NOW() WHERE id = $1",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
