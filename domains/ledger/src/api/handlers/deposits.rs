//! Deposit API handlers
//!
//! Implements:
//! - GET /v1/deposit - List all deposit claims (admin)
//! - GET /v1/deposit/my - List own deposit claims
//! - POST /v1/deposit - Claim an external payment
//! - PATCH /v1/deposit/status/{id} - Settle a claim (admin)

use crate::api::middleware::LedgerState;
use crate::domain::entities::{Deposit, LedgerStatus};
use crate::repository::deposits::NewDeposit;
use crate::repository::transactions::{credit_balance_tx, set_deposit_status_tx};
use adperk_auth::{AdminUser, SessionUser};
use adperk_common::{Error, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct DepositRequest {
    #[validate(range(min = 1))]
    pub amount: i64,

    #[validate(length(min = 1, max = 128))]
    pub transaction_id: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    #[validate(length(min = 1, max = 64))]
    pub method: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: LedgerStatus,
}

#[derive(Debug, Serialize)]
pub struct DepositResponse {
    pub message: String,
    pub deposit: Deposit,
}

/// GET /v1/deposit - List all deposit claims (admin only)
pub async fn list_deposits(
    AdminUser(_auth_context): AdminUser,
    State(state): State<LedgerState>,
) -> Result<Json<Vec<Deposit>>> {
    Ok(Json(state.repos.deposits.list_all().await?))
}

/// GET /v1/deposit/my - List the caller's deposit claims
pub async fn list_my_deposits(
    SessionUser(auth_context): SessionUser,
    State(state): State<LedgerState>,
) -> Result<Json<Vec<Deposit>>> {
    Ok(Json(
        state
            .repos
            .deposits
            .list_for_user(auth_context.user.id)
            .await?,
    ))
}

/// POST /v1/deposit - Claim an external payment
pub async fn create_deposit(
    SessionUser(auth_context): SessionUser,
    State(state): State<LedgerState>,
    Json(request): Json<DepositRequest>,
) -> Result<(StatusCode, Json<DepositResponse>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let deposit = state
        .repos
        .deposits
        .create(NewDeposit {
            user_id: auth_context.user.id,
            amount: request.amount,
            transaction_id: request.transaction_id,
            phone: request.phone,
            method: request.method,
        })
        .await?;

    tracing::info!(deposit_id = %deposit.id, user_id = %deposit.user_id, "Deposit claimed");

    Ok((
        StatusCode::CREATED,
        Json(DepositResponse {
            message: "Deposit recorded, waiting for confirmation".to_string(),
            deposit,
        }),
    ))
}

/// PATCH /v1/deposit/status/{id} - Settle a deposit claim (admin only)
///
/// Moving to `success` credits the balance; the credit and the status
/// change commit together.
pub async fn update_deposit_status(
    AdminUser(_auth_context): AdminUser,
    State(state): State<LedgerState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<DepositResponse>> {
    let existing = state
        .repos
        .deposits
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Deposit not found".to_string()))?;

    if !existing.status.settleable() {
        return Err(Error::Conflict("Deposit already settled".to_string()));
    }

    let mut transaction = state
        .repos
        .begin()
        .await
        .map_err(|e| Error::Internal(format!("Failed to begin transaction: {}", e)))?;

    if request.status == LedgerStatus::Success {
        credit_balance_tx(&mut transaction, existing.user_id, existing.amount)
            .await
            .map_err(Error::from)?;
    }

    // Zero rows means another settlement won the race; the credit above
    // rolls back with the dropped transaction.
    let deposit = set_deposit_status_tx(&mut transaction, id, request.status)
        .await
        .map_err(Error::from)?
        .ok_or_else(|| Error::Conflict("Deposit already settled".to_string()))?;

    transaction
        .commit()
        .await
        .map_err(|e| Error::Internal(format!("Failed to commit transaction: {}", e)))?;

    tracing::info!(deposit_id = %id, status = ?deposit.status, "Deposit settled");

    Ok(Json(DepositResponse {
        message: "Deposit status updated".to_string(),
        deposit,
    }))
}
