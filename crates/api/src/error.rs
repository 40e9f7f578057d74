//! Error types for the API.
//!
//! Every failure is reported as a 500 with a JSON `{"error": ...}` body; the
//! API makes no distinction between client and server faults.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database error.
    #[error(transparent)]
    Database(#[from] database::DatabaseError),

    /// The brain failed or timed out.
    #[error(transparent)]
    Brain(#[from] brain_core::BrainError),

    /// The request body could not be read as the expected JSON.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(err) => tracing::error!("Database error: {}", err),
            ApiError::Brain(err) => tracing::error!("Brain error: {}", err),
            ApiError::BadRequest(msg) => tracing::warn!("Rejected request body: {}", msg),
        }

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejections go through [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use database::DatabaseError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_is_server_error() {
        let err = ApiError::from(DatabaseError::NotFound {
            entity: "User",
            id: "u9".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "User not found: u9");
    }

    #[tokio::test]
    async fn test_brain_timeout_message() {
        let err = ApiError::from(brain_core::BrainError::Timeout(std::time::Duration::from_secs(3)));
        let body = body_json(err.into_response()).await;
        assert_eq!(body["error"], "processing timed out after 3s");
    }
}
