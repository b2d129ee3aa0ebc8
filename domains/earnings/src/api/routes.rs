//! Route definitions for the Earnings domain API

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{earnings, plans, works};
use super::middleware::EarningsState;

/// Create earning flow routes
fn earning_routes() -> Router<EarningsState> {
    Router::new()
        .route("/v1/user/buyPlan", post(earnings::buy_plan))
        .route("/v1/user/userEarning", post(earnings::earn))
        .route("/v1/user/getAllClickAd", get(earnings::list_grants))
        .route("/v1/user/checkClickAdToken", put(earnings::check_grant))
}

/// Create plan management routes
fn plan_routes() -> Router<EarningsState> {
    Router::new()
        .route("/v1/plan", get(plans::list_plans).post(plans::create_plan))
        .route(
            "/v1/plan/{id}",
            get(plans::get_plan)
                .put(plans::update_plan)
                .delete(plans::delete_plan),
        )
}

/// Create ad unit management routes
fn work_routes() -> Router<EarningsState> {
    Router::new()
        .route("/v1/work", get(works::list_works).post(works::create_work))
        .route(
            "/v1/work/{id}",
            get(works::get_work)
                .put(works::update_work)
                .delete(works::delete_work),
        )
}

/// Create all Earnings domain API routes
pub fn routes() -> Router<EarningsState> {
    Router::new()
        .merge(earning_routes())
        .merge(plan_routes())
        .merge(work_routes())
}
