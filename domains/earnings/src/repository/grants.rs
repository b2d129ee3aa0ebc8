//! Cooldown grant repository
//!
//! One row per (user, ad). Claiming happens inside the earn
//! transaction (see `transactions::claim_grant_tx`); this repository
//! covers reads and lazy reaping.

use crate::domain::entities::ClickGrant;
use adperk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

const GRANT_COLUMNS: &str = "id, user_id, ad_id, ad_name, token, expires_at, created_at";

#[derive(Clone)]
pub struct GrantRepository {
    pool: PgPool,
}

impl GrantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ClickGrant>> {
        let grants: Vec<ClickGrant> = sqlx::query_as(&format!(
            "SELECT {GRANT_COLUMNS} FROM click_grants WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(grants)
    }

    pub async fn find_for_ad(&self, user_id: Uuid, ad_id: Uuid) -> Result<Option<ClickGrant>> {
        let grant: Option<ClickGrant> = sqlx::query_as(&format!(
            "SELECT {GRANT_COLUMNS} FROM click_grants WHERE user_id = $1 AND ad_id = $2"
        ))
        .bind(user_id)
        .bind(ad_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(grant)
    }

    pub async fn find_by_token(&self, user_id: Uuid, token: &str) -> Result<Option<ClickGrant>> {
        let grant: Option<ClickGrant> = sqlx::query_as(&format!(
            "SELECT {GRANT_COLUMNS} FROM click_grants WHERE user_id = $1 AND token = $2"
        ))
        .bind(user_id)
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(grant)
    }

    /// Delete a dead grant row (lazy reap). Idempotent.
    pub async fn reap(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM click_grants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

}
