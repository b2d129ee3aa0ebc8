//! Transactional free functions for the Earnings domain
//!
//! Multi-write sequences (earn, purchase) run inside one transaction
//! with a single commit point. Each function takes an open
//! transaction and performs exactly one statement.

use chrono::{DateTime, Utc};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

/// Claim a cooldown grant within an existing transaction.
///
/// Conditional upsert: inserts a fresh grant, or replaces one whose
/// denormalized expiry has passed. Zero rows affected means a live
/// grant already exists.
pub async fn claim_grant_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    ad_id: Uuid,
    ad_name: &str,
    token: &str,
    expires_at: DateTime<Utc>,
) -> std::result::Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO click_grants (id, user_id, ad_id, ad_name, token, expires_at, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW())
        ON CONFLICT (user_id, ad_id) DO UPDATE
            SET token = EXCLUDED.token,
                ad_name = EXCLUDED.ad_name,
                expires_at = EXCLUDED.expires_at,
                created_at = NOW()
            WHERE click_grants.expires_at <= NOW()
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(ad_id)
    .bind(ad_name)
    .bind(token)
    .bind(expires_at)
    .execute(&mut **transaction)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Adjust a user's balance by a signed delta within an existing
/// transaction.
pub async fn adjust_balance_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    delta: i64,
) -> std::result::Result<i64, sqlx::Error> {
    let (balance,): (i64,) = sqlx::query_as(
        r#"
        UPDATE users SET balance = balance + $2, updated_at = NOW()
        WHERE id = $1
        RETURNING balance
        "#,
    )
    .bind(user_id)
    .bind(delta)
    .fetch_one(&mut **transaction)
    .await?;

    Ok(balance)
}

/// Append an immutable earning-ledger row within an existing
/// transaction.
pub async fn insert_earning_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    label: &str,
    amount: i64,
) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO earnings (id, user_id, label, amount, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(label)
    .bind(amount)
    .execute(&mut **transaction)
    .await?;

    Ok(())
}

/// Assign a plan and its validity token within an existing transaction.
pub async fn assign_plan_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    plan_id: Uuid,
    plan_token: &str,
) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users SET plan_id = $2, plan_token = $3, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(plan_id)
    .bind(plan_token)
    .execute(&mut **transaction)
    .await?;

    Ok(())
}

/// Append a purchase-history row within an existing transaction.
pub async fn insert_purchase_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    plan_name: &str,
    amount: i64,
) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO purchases (id, user_id, plan_name, amount, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(plan_name)
    .bind(amount)
    .execute(&mut **transaction)
    .await?;

    Ok(())
}
