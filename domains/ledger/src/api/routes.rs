//! Route definitions for the Ledger domain API

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{cash_outs, deposits};
use super::middleware::LedgerState;

/// Create cash-out routes
fn cash_out_routes() -> Router<LedgerState> {
    Router::new()
        .route(
            "/v1/cashOut",
            get(cash_outs::list_cash_outs).post(cash_outs::create_cash_out),
        )
        .route("/v1/cashOut/my", get(cash_outs::list_my_cash_outs))
        .route(
            "/v1/cashOut/status/{id}",
            patch(cash_outs::update_cash_out_status),
        )
}

/// Create deposit routes
fn deposit_routes() -> Router<LedgerState> {
    Router::new()
        .route(
            "/v1/deposit",
            get(deposits::list_deposits).post(deposits::create_deposit),
        )
        .route("/v1/deposit/my", get(deposits::list_my_deposits))
        .route(
            "/v1/deposit/status/{id}",
            patch(deposits::update_deposit_status),
        )
}

/// Create all Ledger domain API routes
pub fn routes() -> Router<LedgerState> {
    Router::new().merge(cash_out_routes()).merge(deposit_routes())
}
