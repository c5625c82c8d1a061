use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with. Validation and auth failures carry a
/// client-facing message; store and signing failures collapse to a generic
/// 500 so internals never leak.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User already exists")]
    DuplicateUser,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("No token, authorization denied")]
    MissingToken,
    #[error("Token is not valid")]
    InvalidToken,
    #[error("You aren't eligible to give blood (under 18).")]
    IneligibleAge,
    #[error("You aren't eligible to give blood (under 60kg).")]
    IneligibleWeight,
    #[error("{0}")]
    Validation(&'static str),
    #[error("Server error")]
    Store(#[from] sqlx::Error),
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::DuplicateUser
            | ApiError::InvalidCredentials
            | ApiError::IneligibleAge
            | ApiError::IneligibleWeight
            | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingToken | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(e) => error!(error = %e, "store failure"),
            ApiError::Internal(e) => error!(error = %e, "internal failure"),
            _ => {}
        }
        let status = self.status();
        (status, Json(json!({ "msg": self.to_string() }))).into_response()
    }
}
