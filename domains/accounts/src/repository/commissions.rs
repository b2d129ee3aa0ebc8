//! Referral commission repository

use crate::domain::entities::{Commission, CommissionStatus};
use adperk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CommissionRepository {
    pool: PgPool,
}

impl CommissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a pending commission for the referrer named by `reference`.
    pub async fn create(
        &self,
        reference: &str,
        new_user: &str,
        commission: i64,
    ) -> Result<Commission> {
        let row: Commission = sqlx::query_as(
            r#"
            INSERT INTO commissions (id, reference, new_user, commission, status, created_at)
            VALUES ($1, $2, $3, $4, 'pending', NOW())
            RETURNING id, reference, new_user, commission, status, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(reference)
        .bind(new_user)
        .bind(commission)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// List commissions credited to a referrer's user name
    pub async fn list_for_reference(&self, reference: &str) -> Result<Vec<Commission>> {
        let rows: Vec<Commission> = sqlx::query_as(
            r#"
            SELECT id, reference, new_user, commission, status, created_at
            FROM commissions
            WHERE reference = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(reference)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// List all commissions (admin view)
    pub async fn list_all(&self) -> Result<Vec<Commission>> {
        let rows: Vec<Commission> = sqlx::query_as(
            r#"
            SELECT id, reference, new_user, commission, status, created_at
            FROM commissions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Update commission status (admin settlement)
    pub async fn set_status(&self, id: Uuid, status: CommissionStatus) -> Result<Option<Commission>> {
        let row: Option<Commission> = sqlx::query_as(
            r#"
            UPDATE commissions SET status = $2
            WHERE id = $1
            RETURNING id, reference, new_user, commission, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
