//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::models::ScaleError;
use crate::services::SummaryError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (bad query parameter)
    BadRequest(String),
    /// Provider data violates the model's invariants
    MalformedData {
        message: String,
        details: serde_json::Value,
    },
    /// The summary provider failed
    Provider(RepositoryError),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ApiError) {
        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::MalformedData { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("MALFORMED_DATA", message).with_details(details),
            ),
            AppError::Provider(e) => {
                let msg = e.to_string();
                match e {
                    RepositoryError::NotFound { .. } => {
                        (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg))
                    }
                    RepositoryError::ConnectionError { .. }
                    | RepositoryError::TimeoutError { .. } => (
                        StatusCode::BAD_GATEWAY,
                        ApiError::new("PROVIDER_UNAVAILABLE", msg),
                    ),
                    RepositoryError::ValidationError { .. } => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiError::new("REPOSITORY_ERROR", msg),
                    ),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_body();
        (status, Json(error)).into_response()
    }
}

impl From<SummaryError> for AppError {
    fn from(err: SummaryError) -> Self {
        match err {
            SummaryError::ProviderFailure(e) => AppError::Provider(e),
            SummaryError::MalformedData { player_id, report } => AppError::MalformedData {
                message: format!(
                    "summary for player {} is malformed: {} error(s)",
                    player_id,
                    report.errors.len()
                ),
                details: serde_json::to_value(&report.errors).unwrap_or_default(),
            },
        }
    }
}

impl From<ScaleError> for AppError {
    fn from(err: ScaleError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::ErrorContext;

    fn provider(err: RepositoryError) -> (StatusCode, ApiError) {
        AppError::from(SummaryError::ProviderFailure(err)).status_and_body()
    }

    #[test]
    fn test_provider_failures_map_to_status() {
        let (status, body) = provider(RepositoryError::timeout("no answer in 5s"));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.code, "PROVIDER_UNAVAILABLE");

        let (status, _) = provider(RepositoryError::connection("refused"));
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, body) = provider(RepositoryError::not_found(
            "Player 3 not found",
            ErrorContext::new("get_player_summary"),
        ));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.message.contains("Player 3"));

        let (status, body) = provider(RepositoryError::rejected("dup", ErrorContext::default()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "REPOSITORY_ERROR");
    }

    #[test]
    fn test_bad_scale_is_bad_request() {
        let err = crate::models::CourtScale::new(0.0).unwrap_err();
        let (status, body) = AppError::from(err).status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.details.is_none());
    }
}
