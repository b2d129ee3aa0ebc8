//! HTTP handlers for the Earnings domain

pub mod earnings;
pub mod plans;
pub mod works;

use crate::domain::EarnError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Error response shape shared by earnings endpoints
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// API error for earnings endpoints.
///
/// Domain outcomes carry their own codes; everything else defers to
/// the common error mapping.
#[derive(Debug)]
pub enum ApiError {
    Earn(EarnError),
    Common(adperk_common::Error),
}

impl ApiError {
    fn earn_status(err: &EarnError) -> (StatusCode, &'static str) {
        match err {
            EarnError::NoPlan => (StatusCode::BAD_REQUEST, "NO_PLAN"),
            EarnError::AlreadyOwned => (StatusCode::CONFLICT, "ALREADY_OWNED"),
            EarnError::PlanNotFound => (StatusCode::NOT_FOUND, "PLAN_NOT_FOUND"),
            EarnError::AdNotFound => (StatusCode::NOT_FOUND, "AD_NOT_FOUND"),
            EarnError::InsufficientBalance => (StatusCode::BAD_REQUEST, "INSUFFICIENT_BALANCE"),
            EarnError::AlreadyClaimed => (StatusCode::CONFLICT, "ALREADY_CLAIMED"),
            EarnError::ServerMisconfigured => {
                (StatusCode::INTERNAL_SERVER_ERROR, "SERVER_MISCONFIGURED")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Earn(err) => {
                let (status, code) = Self::earn_status(&err);
                if status.is_server_error() {
                    tracing::error!(error = %err, "Earnings request failed");
                }
                let body = ErrorResponse {
                    error: ErrorDetail {
                        code: code.to_string(),
                        message: err.to_string(),
                    },
                };
                (status, Json(body)).into_response()
            }
            ApiError::Common(err) => err.into_response(),
        }
    }
}

impl From<EarnError> for ApiError {
    fn from(err: EarnError) -> Self {
        ApiError::Earn(err)
    }
}

impl From<adperk_common::Error> for ApiError {
    fn from(err: adperk_common::Error) -> Self {
        ApiError::Common(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earn_error_status_mapping() {
        let cases = [
            (EarnError::NoPlan, StatusCode::BAD_REQUEST, "NO_PLAN"),
            (EarnError::AlreadyOwned, StatusCode::CONFLICT, "ALREADY_OWNED"),
            (
                EarnError::AlreadyClaimed,
                StatusCode::CONFLICT,
                "ALREADY_CLAIMED",
            ),
            (
                EarnError::InsufficientBalance,
                StatusCode::BAD_REQUEST,
                "INSUFFICIENT_BALANCE",
            ),
            (
                EarnError::ServerMisconfigured,
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVER_MISCONFIGURED",
            ),
        ];

        for (err, expected_status, expected_code) in cases {
            let (status, code) = ApiError::earn_status(&err);
            assert_eq!(status, expected_status);
            assert_eq!(code, expected_code);
        }
    }
}
