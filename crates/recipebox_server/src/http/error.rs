//! HTTP error translation.
//!
//! # Invariants
//! - Every failure becomes a JSON body of the form `{"error": "..."}`.
//! - Validation failures map to 400; storage and internal failures to 500.
//! - Storage and internal details are logged, never sent to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info};
use recipebox_core::{RecipeValidationError, StoreError};
use serde_json::json;
use tokio::task::JoinError;

/// Failure of one API request.
#[derive(Debug)]
pub enum ApiError {
    Validation(RecipeValidationError),
    Storage(StoreError),
    InvalidBody(JsonRejection),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Storage(_) => "failed to save recipe".to_string(),
            Self::InvalidBody(_) => "invalid JSON body".to_string(),
            Self::Internal(_) => "internal server error".to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Validation(err) => Self::Validation(err),
            other => Self::Storage(other),
        }
    }
}

impl From<JoinError> for ApiError {
    fn from(value: JoinError) -> Self {
        Self::Internal(format!("blocking task failed: {value}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage(err) => error!(
                "event=http_error module=http status=error error_code=storage_failed error={}",
                err
            ),
            Self::Internal(details) => error!(
                "event=http_error module=http status=error error_code=internal error={}",
                details
            ),
            Self::InvalidBody(rejection) => info!(
                "event=http_error module=http status=rejected error_code=invalid_body error={}",
                rejection.body_text()
            ),
            Self::Validation(_) => {}
        }

        let body = Json(json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use recipebox_core::{RecipeValidationError, StoreError};

    #[test]
    fn store_validation_errors_become_bad_requests() {
        let err = ApiError::from(StoreError::Validation(RecipeValidationError::TitleRequired));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "title required");
    }

    #[test]
    fn storage_errors_hide_details() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/secret/path");
        let err = ApiError::from(StoreError::Io(io));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "failed to save recipe");
    }
}
