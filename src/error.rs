//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::response::PrettyJson;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error("validation errors")]
    Validation,
    #[error("{0}")]
    Request(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(entity: &'static str) -> Self {
        AppError::NotFound { entity }
    }

    /// Fold storage failures into the request-error bucket. The creation
    /// route reports every failure, storage included, as a 400.
    pub fn into_request_error(self) -> Self {
        match self {
            AppError::Db(e) => AppError::Request(e.to_string()),
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                PrettyJson(json!({ "error": self.to_string() })),
            )
                .into_response(),
            AppError::Validation | AppError::Request(_) => (
                StatusCode::BAD_REQUEST,
                PrettyJson(json!({ "errors": [self.to_string()] })),
            )
                .into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn response_parts(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_error_body() {
        let (status, body) = response_parts(AppError::not_found("Restaurant")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Restaurant not found" }));
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_literal_errors_body() {
        let (status, body) = response_parts(AppError::Validation).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errors": ["validation errors"] }));
    }

    #[tokio::test]
    async fn request_error_carries_its_message() {
        let (status, body) = response_parts(AppError::Request("price is required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "errors": ["price is required"] }));
    }

    #[tokio::test]
    async fn storage_error_maps_to_500() {
        let (status, _) = response_parts(AppError::Db(sqlx::Error::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn creation_boundary_folds_storage_errors_into_request_errors() {
        let folded = AppError::Db(sqlx::Error::PoolClosed).into_request_error();
        assert!(matches!(folded, AppError::Request(_)));
        let kept = AppError::Validation.into_request_error();
        assert!(matches!(kept, AppError::Validation));
    }
}
