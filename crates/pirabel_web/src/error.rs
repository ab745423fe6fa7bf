use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use pirabel_core::Error;
use pirabel_views::{ANALYSIS_FAILED, GENERIC_ERROR};

/// Request failures as seen by API clients. Upstream details are logged, never returned.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("missing or invalid session")]
    Unauthorized,

    #[error("administrator access required")]
    Forbidden,

    #[error("{0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    #[error("audit failed: {0}")]
    Audit(Error),

    #[error("upstream failure: {0}")]
    Upstream(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::EmptyInput(field) => ApiError::BadRequest(format!("{field} is required")),
            Error::InvalidUrl(reason) => ApiError::BadRequest(reason),
            other => ApiError::Upstream(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            ApiError::BadRequest(reason) => {
                warn!("⚠️ Rejected request: {}", reason);
                (StatusCode::BAD_REQUEST, reason.clone())
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Audit(e) => {
                error!("❌ Audit failed: {}", e);
                (StatusCode::BAD_GATEWAY, ANALYSIS_FAILED.to_string())
            }
            ApiError::Upstream(e) if e.is_malformed_response() => {
                warn!("⚠️ Completion service returned an unusable payload: {}", e);
                (StatusCode::BAD_GATEWAY, GENERIC_ERROR.to_string())
            }
            ApiError::Upstream(e) => {
                error!("❌ Request failed: {}", e);
                (StatusCode::BAD_GATEWAY, GENERIC_ERROR.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
