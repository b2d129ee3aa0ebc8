//! Support ticket API handlers
//!
//! Implements:
//! - GET /v1/support - List all tickets (admin)
//! - GET /v1/support/my - List own tickets
//! - POST /v1/support - File a ticket
//! - PATCH /v1/support/status/{id} - Update ticket status (admin)

use crate::api::middleware::SupportState;
use crate::domain::entities::{Ticket, TicketPriority, TicketStatus};
use crate::repository::tickets::NewTicket;
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
pub struct TicketRequest {
    #[validate(length(min = 1, max = 255))]
    pub subject: String,

    pub priority: Option<TicketPriority>,

    #[validate(length(min = 1, max = 4096))]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: TicketStatus,
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub message: String,
    pub ticket: Ticket,
}

/// GET /v1/support - List all tickets (admin only)
pub async fn list_tickets(
    AdminUser(_auth_context): AdminUser,
    State(state): State<SupportState>,
) -> Result<Json<Vec<Ticket>>> {
    Ok(Json(state.repos.tickets.list_all().await?))
}

/// GET /v1/support/my - List the caller's tickets
pub async fn list_my_tickets(
    SessionUser(auth_context): SessionUser,
    State(state): State<SupportState>,
) -> Result<Json<Vec<Ticket>>> {
    Ok(Json(
        state
            .repos
            .tickets
            .list_for_user(auth_context.user.id)
            .await?,
    ))
}

/// POST /v1/support - File a ticket
///
/// Name and email come from the session identity, not the body.
pub async fn create_ticket(
    SessionUser(auth_context): SessionUser,
    State(state): State<SupportState>,
    Json(request): Json<TicketRequest>,
) -> Result<(StatusCode, Json<TicketResponse>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let ticket = state
        .repos
        .tickets
        .create(NewTicket {
            user_id: auth_context.user.id,
            name: auth_context.user.name.clone(),
            email: auth_context.user.email.clone(),
            subject: request.subject,
            priority: request.priority.unwrap_or(TicketPriority::High),
            message: request.message,
        })
        .await?;

    tracing::info!(ticket_id = %ticket.id, user_id = %ticket.user_id, "Support ticket filed");

    Ok((
        StatusCode::CREATED,
        Json(TicketResponse {
            message: "Ticket filed, waiting for reply".to_string(),
            ticket,
        }),
    ))
}

/// PATCH /v1/support/status/{id} - Update ticket status (admin only)
pub async fn update_ticket_status(
    AdminUser(_auth_context): AdminUser,
    State(state): State<SupportState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<TicketResponse>> {
    let ticket = state
        .repos
        .tickets
        .set_status(id, request.status)
        .await?
        .ok_or_else(|| Error::NotFound("Ticket not found".to_string()))?;

    tracing::info!(ticket_id = %id, status = ?ticket.status, "Ticket status updated");

    Ok(Json(TicketResponse {
        message: "Ticket status updated".to_string(),
        ticket,
    }))
}
