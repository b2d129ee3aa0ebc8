//! Earning flow API handlers
//!
//! Implements:
//! - POST /v1/user/buyPlan - Purchase a plan
//! - POST /v1/user/userEarning - Claim an ad and credit the reward
//! - GET /v1/user/getAllClickAd - List live cooldown grants
//! - PUT /v1/user/checkClickAdToken - Check one grant, reaping on expiry

use crate::api::handlers::ApiError;
use crate::api::middleware::EarningsState;
use crate::domain::entities::{ClickGrant, Earning, Plan};
use crate::domain::{entitlement, guard, EarnError};
use crate::domain::entitlement::Entitlement;
use crate::domain::guard::GrantState;
use crate::repository::transactions::{
    adjust_balance_tx, assign_plan_tx, claim_grant_tx, insert_earning_tx, insert_purchase_tx,
};
use adperk_auth::SessionUser;
use adperk_common::Error;
use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct BuyPlanRequest {
    pub plan: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct EarnRequest {
    /// Ad unit being claimed
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CheckGrantRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct BuyPlanResponse {
    pub message: String,
    pub plan: Plan,
    pub balance: i64,
}

#[derive(Debug, Serialize)]
pub struct EarnResponse {
    pub message: String,
    pub earn: i64,
    pub balance: i64,
    pub grant: ClickGrant,
    pub total_earning: Vec<Earning>,
}

#[derive(Debug, Serialize)]
pub struct GrantListResponse {
    pub grants: Vec<ClickGrant>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum GrantCheckResponse {
    /// Token still live; the ad stays claimed
    OnCooldown { grant: ClickGrant },
    /// Token dead; the row was reaped and the ad is claimable again
    Eligible,
}

/// POST /v1/user/buyPlan - Purchase a plan
///
/// Stale assignments (validity token no longer verifies) are cleared
/// before the ownership check, forcing a re-purchase instead of
/// blocking one.
pub async fn buy_plan(
    SessionUser(auth_context): SessionUser,
    State(state): State<EarningsState>,
    Json(request): Json<BuyPlanRequest>,
) -> Result<Json<BuyPlanResponse>, ApiError> {
    let user_id = auth_context.user.id;

    let profile = state
        .repos
        .profiles
        .get(user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    let codec = state.auth.codec();
    match entitlement::evaluate(codec, profile.plan_id, profile.plan_token.as_deref()) {
        Entitlement::Active => return Err(EarnError::AlreadyOwned.into()),
        Entitlement::Stale => {
            tracing::debug!(user_id = %user_id, "Clearing stale plan assignment");
            state.repos.profiles.clear_plan(user_id).await?;
        }
        Entitlement::None => {}
    }

    let plan = state
        .repos
        .plans
        .get_by_id(request.plan)
        .await?
        .ok_or(EarnError::PlanNotFound)?;

    entitlement::check_purchase(profile.balance, plan.price)?;

    let validity_token = entitlement::mint_validity(codec, &profile.email, plan.validity_days)
        .map_err(|e| Error::Internal(format!("Failed to mint validity token: {}", e)))?;

    let mut transaction = state
        .repos
        .begin()
        .await
        .map_err(|e| Error::Internal(format!("Failed to begin transaction: {}", e)))?;

    let balance = adjust_balance_tx(&mut transaction, user_id, -plan.price)
        .await
        .map_err(Error::from)?;
    assign_plan_tx(&mut transaction, user_id, plan.id, &validity_token)
        .await
        .map_err(Error::from)?;
    insert_purchase_tx(&mut transaction, user_id, &plan.name, plan.price)
        .await
        .map_err(Error::from)?;

    transaction
        .commit()
        .await
        .map_err(|e| Error::Internal(format!("Failed to commit transaction: {}", e)))?;

    tracing::info!(user_id = %user_id, plan_id = %plan.id, "Plan purchased");

    Ok(Json(BuyPlanResponse {
        message: "Plan bought successfully".to_string(),
        plan,
        balance,
    }))
}

/// POST /v1/user/userEarning - Claim an ad click and credit the reward
///
/// Grant acquisition, balance credit, and ledger append commit
/// together; a lost claim race rolls the whole request back.
pub async fn earn(
    SessionUser(auth_context): SessionUser,
    State(state): State<EarningsState>,
    Json(request): Json<EarnRequest>,
) -> Result<Json<EarnResponse>, ApiError> {
    let user_id = auth_context.user.id;

    let profile = state
        .repos
        .profiles
        .get(user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    let codec = state.auth.codec();
    match entitlement::evaluate(codec, profile.plan_id, profile.plan_token.as_deref()) {
        Entitlement::Active => {}
        Entitlement::Stale => {
            tracing::debug!(user_id = %user_id, "Clearing stale plan assignment");
            state.repos.profiles.clear_plan(user_id).await?;
            return Err(EarnError::NoPlan.into());
        }
        Entitlement::None => return Err(EarnError::NoPlan.into()),
    }

    let plan_id = profile.plan_id.ok_or(EarnError::NoPlan)?;
    let plan = state
        .repos
        .plans
        .get_by_id(plan_id)
        .await?
        .ok_or(EarnError::NoPlan)?;

    if plan.per_click_reward <= 0 {
        return Err(EarnError::ServerMisconfigured.into());
    }

    let work = state
        .repos
        .works
        .get_by_id(request.id)
        .await?
        .ok_or(EarnError::AdNotFound)?;

    let token = guard::mint_grant_token(codec, &profile.email, work.id, state.cooldown_profile)
        .map_err(|e| Error::Internal(format!("Failed to mint cooldown token: {}", e)))?;
    let expires_at = guard::grant_expiry(state.cooldown_profile, Utc::now());

    let mut transaction = state
        .repos
        .begin()
        .await
        .map_err(|e| Error::Internal(format!("Failed to begin transaction: {}", e)))?;

    let claimed = claim_grant_tx(
        &mut transaction,
        user_id,
        work.id,
        &work.name,
        &token,
        expires_at,
    )
    .await
    .map_err(Error::from)?;

    if !claimed {
        // Live grant exists; nothing was written
        return Err(EarnError::AlreadyClaimed.into());
    }

    let balance = adjust_balance_tx(&mut transaction, user_id, plan.per_click_reward)
        .await
        .map_err(Error::from)?;
    insert_earning_tx(&mut transaction, user_id, &work.name, plan.per_click_reward)
        .await
        .map_err(Error::from)?;

    transaction
        .commit()
        .await
        .map_err(|e| Error::Internal(format!("Failed to commit transaction: {}", e)))?;

    let grant = state
        .repos
        .grants
        .find_for_ad(user_id, work.id)
        .await?
        .ok_or_else(|| Error::Internal("Claimed grant row missing".to_string()))?;

    let total_earning = state.repos.history.earnings_for_user(user_id).await?;

    tracing::info!(
        user_id = %user_id,
        ad_id = %work.id,
        reward = plan.per_click_reward,
        "Ad click credited"
    );

    Ok(Json(EarnResponse {
        message: format!("Congratulations, you earned {}", plan.per_click_reward),
        earn: plan.per_click_reward,
        balance,
        grant,
        total_earning,
    }))
}

/// GET /v1/user/getAllClickAd - List live grants, reaping dead ones
pub async fn list_grants(
    SessionUser(auth_context): SessionUser,
    State(state): State<EarningsState>,
) -> Result<Json<GrantListResponse>, ApiError> {
    let user_id = auth_context.user.id;
    let codec = state.auth.codec();

    let mut live = Vec::new();
    for grant in state.repos.grants.list_for_user(user_id).await? {
        match guard::grant_state(codec, &grant.token) {
            GrantState::OnCooldown => live.push(grant),
            GrantState::Eligible => {
                tracing::debug!(grant_id = %grant.id, "Reaping dead cooldown grant");
                state.repos.grants.reap(grant.id).await?;
            }
        }
    }

    Ok(Json(GrantListResponse { grants: live }))
}

/// PUT /v1/user/checkClickAdToken - Check one grant by its token
pub async fn check_grant(
    SessionUser(auth_context): SessionUser,
    State(state): State<EarningsState>,
    Json(request): Json<CheckGrantRequest>,
) -> Result<Json<GrantCheckResponse>, ApiError> {
    let user_id = auth_context.user.id;
    let codec = state.auth.codec();

    let Some(grant) = state
        .repos
        .grants
        .find_by_token(user_id, &request.token)
        .await?
    else {
        return Ok(Json(GrantCheckResponse::Eligible));
    };

    match guard::grant_state(codec, &grant.token) {
        GrantState::OnCooldown => Ok(Json(GrantCheckResponse::OnCooldown { grant })),
        GrantState::Eligible => {
            state.repos.grants.reap(grant.id).await?;
            Ok(Json(GrantCheckResponse::Eligible))
        }
    }
}
