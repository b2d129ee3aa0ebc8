//! Plan management API handlers
//!
//! Implements:
//! - GET /v1/plan - List plans
//! - GET /v1/plan/{id} - Get a plan (admin)
//! - POST /v1/plan - Create a plan (admin)
//! - PUT /v1/plan/{id} - Update a plan (admin)
//! - DELETE /v1/plan/{id} - Delete a plan (admin)

use crate::api::middleware::EarningsState;
use crate::domain::entities::Plan;
use crate::repository::plans::NewPlan;
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
pub struct PlanRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(range(min = 0))]
    pub price: i64,

    #[validate(range(min = 1))]
    pub validity_days: i32,

    #[validate(range(min = 1))]
    pub per_click_reward: i64,
}

impl From<PlanRequest> for NewPlan {
    fn from(request: PlanRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            validity_days: request.validity_days,
            per_click_reward: request.per_click_reward,
        }
    }
}

/// GET /v1/plan - List all plans
pub async fn list_plans(
    SessionUser(_auth_context): SessionUser,
    State(state): State<EarningsState>,
) -> Result<Json<Vec<Plan>>> {
    Ok(Json(state.repos.plans.list_all().await?))
}

/// GET /v1/plan/{id} - Get a single plan (admin only)
pub async fn get_plan(
    AdminUser(_auth_context): AdminUser,
    State(state): State<EarningsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Plan>> {
    let plan = state
        .repos
        .plans
        .get_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound("Plan not found".to_string()))?;

    Ok(Json(plan))
}

/// POST /v1/plan - Create a plan (admin only)
pub async fn create_plan(
    AdminUser(_auth_context): AdminUser,
    State(state): State<EarningsState>,
    Json(request): Json<PlanRequest>,
) -> Result<(StatusCode, Json<Plan>)> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let plan = state.repos.plans.create(request.into()).await?;

    tracing::info!(plan_id = %plan.id, "Plan created");

    Ok((StatusCode::CREATED, Json(plan)))
}

/// PUT /v1/plan/{id} - Update a plan (admin only)
pub async fn update_plan(
    AdminUser(_auth_context): AdminUser,
    State(state): State<EarningsState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<Plan>> {
    request
        .validate()
        .map_err(|e| Error::Validation(format!("Validation failed: {}", e)))?;

    let plan = state
        .repos
        .plans
        .update(id, request.into())
        .await?
        .ok_or_else(|| Error::NotFound("Plan not found".to_string()))?;

    Ok(Json(plan))
}

/// DELETE /v1/plan/{id} - Delete a plan (admin only)
pub async fn delete_plan(
    AdminUser(_auth_context): AdminUser,
    State(state): State<EarningsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Plan>> {
    let plan = state
        .repos
        .plans
        .delete(id)
        .await?
        .ok_or_else(|| Error::NotFound("Plan not found".to_string()))?;

    tracing::info!(plan_id = %id, "Plan deleted");

    Ok(Json(plan))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_request_validation() {
        let valid = PlanRequest {
            name: "Starter".to_string(),
            price: 60,
            validity_days: 1,
            per_click_reward: 5,
        };
        assert!(valid.validate().is_ok());

        let zero_reward = PlanRequest {
            name: "Broken".to_string(),
            price: 60,
            validity_days: 1,
            per_click_reward: 0,
        };
        assert!(zero_reward.validate().is_err());

        let zero_validity = PlanRequest {
            name: "Broken".to_string(),
            price: 60,
            validity_days: 0,
            per_click_reward: 5,
        };
        assert!(zero_validity.validate().is_err());
    }
}
