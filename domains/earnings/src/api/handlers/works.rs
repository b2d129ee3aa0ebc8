//! Ad unit (work) management API handlers
//!
//! Implements:
//! - GET /v1/work - List ad units
//! - GET /v1/work/{id} - Get an ad unit
//! - POST /v1/work - Create an ad unit (admin)
//! - PUT /v1/work/{id} - Update an ad unit (admin)
//! - DELETE /v1/work/{id} - Delete an ad unit (admin)

use crate::api::middleware::EarningsState;
use crate::domain::entities::Work;
use adperk_auth::{AdminUser, SessionUser};
use adperk_common::{Error, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct WorkRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// GET /v1/work - List all ad units
pub async fn list_works(
    SessionUser(_auth_context): SessionUser,
    State(state): State<EarningsState>,
) -> Result<Json<Vec<Work>>> {
    Ok(Json(state.repos.works.list_all().await?))
}

/// GET /v1/work/{id} - Get a single ad unit
pub async fn get_work(
    SessionUser(_auth_context): SessionUser,
    State(state): State<EarningsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Work>> {
    let work = state
        .repos
        .works
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Work not found".to_string()))?;

    Ok(Json(work))
}

/// POST /v1/work - Create an ad unit (admin only)
pub async fn create_work(
    AdminUser(_auth_context): AdminUser,
    State(state): State<EarningsState>,
    Json(request): Json<WorkRequest>,
) -> Result<(StatusCode, Json<Work>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let work = state.repos.works.create(&request.name).await?;

    tracing::info!(work_id = %work.id, "Work created");

    Ok((StatusCode::CREATED, Json(work)))
}

/// PUT /v1/work/{id} - Update an ad unit (admin only)
pub async fn update_work(
    AdminUser(_auth_context): AdminUser,
    State(state): State<EarningsState>,
    Path(id): Path<Uuid>,
    Json(request): Json<WorkRequest>,
) -> Result<Json<Work>> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let work = state
        .repos
        .works
        .update(id, &request.name)
        .await?
        .ok_or_else(|| Error::NotFound("Work not found".to_string()))?;

    Ok(Json(work))
}

/// DELETE /v1/work/{id} - Delete an ad unit (admin only)
pub async fn delete_work(
    AdminUser(_auth_context): AdminUser,
    State(state): State<EarningsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Work>> {
    let work = state
        .repos
        .works
        .delete(id)
        .await?
        .ok_or_else(|| Error::NotFound("Work not found".to_string()))?;

    tracing::info!(work_id = %id, "Work deleted");

    Ok(Json(work))
}
