//! Deposit repository

use crate::domain::entities::Deposit;
use adperk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

const DEPOSIT_COLUMNS: &str =
    "id, user_id, amount, transaction_id, phone, method, status, created_at, updated_at";

/// Fields required to insert a deposit claim.
pub struct NewDeposit {
    pub user_id: Uuid,
    pub amount: i64,
    pub transaction_id: String,
    pub phone: String,
    pub method: String,
}

#[derive(Clone)]
pub struct DepositRepository {
    pool: PgPool,
}

impl DepositRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_deposit: NewDeposit) -> Result<Deposit> {
        let deposit: Deposit = sqlx::query_as(&format!(
            r#"
            INSERT INTO deposits (id, user_id, amount, transaction_id, phone, method,
                                  status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', NOW(), NOW())
            RETURNING {DEPOSIT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(new_deposit.user_id)
        .bind(new_deposit.amount)
        .bind(&new_deposit.transaction_id)
        .bind(&new_deposit.phone)
        .bind(&new_deposit.method)
        .fetch_one(&self.pool)
        .await?;

        Ok(deposit)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Deposit>> {
        let deposit: Option<Deposit> = sqlx::query_as(&format!(
            "SELECT {DEPOSIT_COLUMNS} FROM deposits WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deposit)
    }

    pub async fn list_all(&self) -> Result<Vec<Deposit>> {
        let deposits: Vec<Deposit> = sqlx::query_as(&format!(
            "SELECT {DEPOSIT_COLUMNS} FROM deposits ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(deposits)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Deposit>> {
        let deposits: Vec<Deposit> = sqlx::query_as(&format!(
            "SELECT {DEPOSIT_COLUMNS} FROM deposits WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(deposits)
    }
}
