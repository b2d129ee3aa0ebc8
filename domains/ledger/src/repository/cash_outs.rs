//! Cash-out repository

use crate::domain::entities::CashOut;
use adperk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

const CASH_OUT_COLUMNS: &str =
    "id, user_id, amount, method, account_number, note, status, created_at, updated_at";

/// Fields required to insert a cash-out request.
pub struct NewCashOut {
    pub user_id: Uuid,
    pub amount: i64,
    pub method: String,
    pub account_number: String,
    pub note: Option<String>,
}

#[derive(Clone)]
pub struct CashOutRepository {
    pool: PgPool,
}

impl CashOutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_cash_out: NewCashOut) -> Result<CashOut> {
        let cash_out: CashOut = sqlx::query_as(&format!(
            r#"
            INSERT INTO cash_outs (id, user_id, amount, method, account_number, note,
                                   status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', NOW(), NOW())
            RETURNING {CASH_OUT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(new_cash_out.user_id)
        .bind(new_cash_out.amount)
        .bind(&new_cash_out.method)
        .bind(&new_cash_out.account_number)
        .bind(&new_cash_out.note)
        .fetch_one(&self.pool)
        .await?;

        Ok(cash_out)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<CashOut>> {
        let cash_out: Option<CashOut> = sqlx::query_as(&format!(
            "SELECT {CASH_OUT_COLUMNS} FROM cash_outs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cash_out)
    }

    pub async fn list_all(&self) -> Result<Vec<CashOut>> {
        let cash_outs: Vec<CashOut> = sqlx::query_as(&format!(
            "SELECT {CASH_OUT_COLUMNS} FROM cash_outs ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(cash_outs)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<CashOut>> {
        let cash_outs: Vec<CashOut> = sqlx::query_as(&format!(
            "SELECT {CASH_OUT_COLUMNS} FROM cash_outs WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cash_outs)
    }
}
