//! Route definitions for the Accounts domain API

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{auth, users};
use super::middleware::AccountsState;

/// Create authentication routes
fn auth_routes() -> Router<AccountsState> {
    Router::new()
        .route("/v1/auth/register", post(auth::register))
        .route("/v1/auth/register/{reference}", post(auth::register))
        .route("/v1/auth/login", post(auth::login))
        .route("/v1/auth/admin", post(auth::admin_login))
        .route("/v1/auth/logOut", get(auth::logout))
        .route("/v1/auth/login/{token}", get(auth::verify_account))
        .route("/v1/auth/resendToken", post(auth::resend_verification))
        .route("/v1/auth/forgotPass", post(auth::forgot_password))
        .route("/v1/auth/resetPass/{token}", post(auth::reset_password))
        .route("/v1/auth/loggedInUser", get(auth::logged_in_user))
        .route("/v1/auth/loggedInAdmin", get(auth::logged_in_admin))
}

/// Create user management routes
fn user_routes() -> Router<AccountsState> {
    Router::new()
        .route("/v1/user/all", get(users::list_users))
        .route("/v1/user/changePassword", put(users::change_password))
        .route(
            "/v1/user/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new().merge(auth_routes()).merge(user_routes())
}
