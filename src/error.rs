use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::scheduler::ScheduleError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A constraint collection could not be fetched or parsed.
    #[error("{0}")]
    Upstream(String),

    /// Demand could not be met even by the forced pass.
    #[error("{0}")]
    Unschedulable(#[from] ScheduleError),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Unschedulable(e) => (StatusCode::CONFLICT, e.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
