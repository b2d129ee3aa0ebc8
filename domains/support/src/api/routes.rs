//! Route definitions for the Support domain API

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::tickets;
use super::middleware::SupportState;

/// Create all Support domain API routes
pub fn routes() -> Router<SupportState> {
    Router::new()
        .route(
            "/v1/support",
            get(tickets::list_tickets).post(tickets::create_ticket),
        )
        .route("/v1/support/my", get(tickets::list_my_tickets))
        .route(
            "/v1/support/status/{id}",
            patch(tickets::update_ticket_status),
        )
}
