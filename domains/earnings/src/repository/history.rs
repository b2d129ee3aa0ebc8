//! Earning and purchase history reads

use crate::domain::entities::{Earning, Purchase};
use adperk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct EarningHistoryRepository {
    pool: PgPool,
}

impl EarningHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn earnings_for_user(&self, user_id: Uuid) -> Result<Vec<Earning>> {
        let rows: Vec<Earning> = sqlx::query_as(
            r#"
            SELECT id, user_id, label, amount, created_at
            FROM earnings
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn purchases_for_user(&self, user_id: Uuid) -> Result<Vec<Purchase>> {
        let rows: Vec<Purchase> = sqlx::query_as(
            r#"
            SELECT id, user_id, plan_name, amount, created_at
            FROM purchases
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
