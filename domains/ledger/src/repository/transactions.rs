//! Transactional free functions for ledger settlement
//!
//! Settling a cash-out or deposit mutates two rows (the request and
//! the user balance); both writes share one commit point.

use crate::domain::entities::{CashOut, Deposit, LedgerStatus};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

/// Debit a user's balance within an existing transaction, but only if
/// the balance covers the amount. Zero rows affected means the funds
/// are gone.
pub async fn debit_if_covered_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    amount: i64,
) -> std::result::Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users SET balance = balance - $2, updated_at = NOW()
        WHERE id = $1 AND balance >= $2
        "#,
    )
    .bind(user_id)
    .bind(amount)
    .execute(&mut **transaction)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Credit a user's balance within an existing transaction.
pub async fn credit_balance_tx(
    transaction: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    amount: i64,
) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users SET balance = balance + $2, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(amount)
    .execute(&mut **transaction)
    .await?;

    Ok(())
}

/// Settle a cash-out within an existing transaction.
///
/// The transition is conditioned on the row still being pending, so
/// two concurrent settlements cannot both commit: the loser sees zero
/// rows and returns `None`, rolling its balance write back with it.
pub async fn set_cash_out_status_tx(
    transaction: &mut Transaction<'_, Postgres>,
    id: Uuid,
    status: LedgerStatus,
) -> std::result::Result<Option<CashOut>, sqlx::Error> {
    let cash_out: Option<CashOut> = sqlx::query_as(
        r#"
        UPDATE cash_outs SET status = $2, updated_at = NOW()
        WHERE id = $1 AND status = $3
        RETURNING id, user_id, amount, method, account_number, note, status, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(LedgerStatus::Pending)
    .fetch_optional(&mut **transaction)
    .await?;

    Ok(cash_out)
}

/// Settle a deposit within an existing transaction.
///
/// Pending-only, same discipline as cash-outs.
pub async fn set_deposit_status_tx(
    transaction: &mut Transaction<'_, Postgres>,
    id: Uuid,
    status: LedgerStatus,
) -> std::result::Result<Option<Deposit>, sqlx::Error> {
    let deposit: Option<Deposit> = sqlx::query_as(
        r#"
        UPDATE deposits SET status = $2, updated_at = NOW()
        WHERE id = $1 AND status = $3
        RETURNING id, user_id, amount, transaction_id, phone, method, status, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(status)
    .bind(LedgerStatus::Pending)
    .fetch_optional(&mut **transaction)
    .await?;

    Ok(deposit)
}
