//! Cash-out API handlers
//!
//! Implements:
//! - GET /v1/cashOut - List all cash-out requests (admin)
//! - GET /v1/cashOut/my - List own cash-out requests
//! - POST /v1/cashOut - Request a cash-out
//! - PATCH /v1/cashOut/status/{id} - Settle a request (admin)

use crate::api::middleware::LedgerState;
use crate::domain::entities::{CashOut, LedgerStatus};
use crate::repository::cash_outs::NewCashOut;
use crate::repository::transactions::{debit_if_covered_tx, set_cash_out_status_tx};
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
pub struct CashOutRequest {
    #[validate(range(min = 1))]
    pub amount: i64,

    #[validate(length(min = 1, max = 64))]
    pub method: String,

    #[validate(length(min = 1, max = 64))]
    pub account_number: String,

    #[validate(length(max = 512))]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: LedgerStatus,
}

#[derive(Debug, Serialize)]
pub struct CashOutResponse {
    pub message: String,
    pub cash_out: CashOut,
}

/// GET /v1/cashOut - List all cash-out requests (admin only)
pub async fn list_cash_outs(
    AdminUser(_auth_context): AdminUser,
    State(state): State<LedgerState>,
) -> Result<Json<Vec<CashOut>>> {
    Ok(Json(state.repos.cash_outs.list_all().await?))
}

/// GET /v1/cashOut/my - List the caller's cash-out requests
pub async fn list_my_cash_outs(
    SessionUser(auth_context): SessionUser,
    State(state): State<LedgerState>,
) -> Result<Json<Vec<CashOut>>> {
    Ok(Json(
        state
            .repos
            .cash_outs
            .list_for_user(auth_context.user.id)
            .await?,
    ))
}

/// POST /v1/cashOut - Request a cash-out
///
/// The balance is only debited when an admin settles the request, but
/// a request larger than the current balance is rejected up front.
pub async fn create_cash_out(
    SessionUser(auth_context): SessionUser,
    State(state): State<LedgerState>,
    Json(request): Json<CashOutRequest>,
) -> Result<(StatusCode, Json<CashOutResponse>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    if request.amount > auth_context.user.balance {
        return Err(Error::Validation("Insufficient balance".to_string()));
    }

    let cash_out = state
        .repos
        .cash_outs
        .create(NewCashOut {
            user_id: auth_context.user.id,
            amount: request.amount,
            method: request.method,
            account_number: request.account_number,
            note: request.note,
        })
        .await?;

    tracing::info!(cash_out_id = %cash_out.id, user_id = %cash_out.user_id, "Cash-out requested");

    Ok((
        StatusCode::CREATED,
        Json(CashOutResponse {
            message: "Cash-out requested, waiting for approval".to_string(),
            cash_out,
        }),
    ))
}

/// PATCH /v1/cashOut/status/{id} - Settle a cash-out (admin only)
///
/// Moving to `success` debits the balance; the debit and the status
/// change commit together, and an uncovered balance aborts both.
pub async fn update_cash_out_status(
    AdminUser(_auth_context): AdminUser,
    State(state): State<LedgerState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<CashOutResponse>> {
    let existing = state
        .repos
        .cash_outs
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Cash-out not found".to_string()))?;

    if !existing.status.settleable() {
        return Err(Error::Conflict("Cash-out already settled".to_string()));
    }

    let mut transaction = state
        .repos
        .begin()
        .await
        .map_err(|e| Error::Internal(format!("Failed to begin transaction: {}", e)))?;

    if request.status == LedgerStatus::Success {
        let covered = debit_if_covered_tx(&mut transaction, existing.user_id, existing.amount)
            .await
            .map_err(Error::from)?;
        if !covered {
            return Err(Error::Validation("Insufficient balance".to_string()));
        }
    }

    // Zero rows means another settlement won the race; the debit above
    // rolls back with the dropped transaction.
    let cash_out = set_cash_out_status_tx(&mut transaction, id, request.status)
        .await
        .map_err(Error::from)?
        .ok_or_else(|| Error::Conflict("Cash-out already settled".to_string()))?;

    transaction
        .commit()
        .await
        .map_err(|e| Error::Internal(format!("Failed to commit transaction: {}", e)))?;

    tracing::info!(cash_out_id = %id, status = ?cash_out.status, "Cash-out settled");

    Ok(Json(CashOutResponse {
        message: "Cash-out status updated".to_string(),
        cash_out,
    }))
}
