//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All JSON route handlers return
//! `Result<T, AppError>`; page handlers render errors inline instead.
//!
//! JSON error responses carry a `success` flag plus an `error` string, except
//! the auth-gate rejection which is the bare `{"error": "Unauthorized"}` shape
//! existing storefront scripts expect. `Internal` is the page-route server
//! failure: it renders its message as a plain-text 500 body, not an envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed input fields.
    #[error("{0}")]
    Validation(String),

    /// An identifier did not resolve to a record.
    #[error("{0}")]
    NotFound(String),

    /// No valid admin session.
    #[error("Unauthorized")]
    Unauthorized,

    /// Underlying persistence failure, with the operation's context message.
    #[error("{context}: {source}")]
    Store {
        context: String,
        source: RepositoryError,
    },

    /// Server failure on a page route; rendered as plain text.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Wrap a repository error, translating store-level validation failures
    /// into one aggregated validation message and attaching `context` to
    /// everything else.
    pub fn from_repository(context: &str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(errors) => {
                Self::Validation(format!("Validatsiya xatosi: {}", errors.join(", ")))
            }
            source => Self::Store {
                context: context.to_string(),
                source,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store { .. } | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Store { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::Unauthorized => json!({ "error": "Unauthorized" }),
            // Page routes answer server failures with the bare message.
            Self::Internal(message) => return (status, message.clone()).into_response(),
            other => json!({ "success": false, "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Mahsulot topilmadi".to_string());
        assert_eq!(err.to_string(), "Mahsulot topilmadi");

        let err = AppError::Validation("Barcha maydonlarni to'ldiring!".to_string());
        assert_eq!(err.to_string(), "Barcha maydonlarni to'ldiring!");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::Validation("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_renders_plain_text_body() {
        let response = AppError::Internal("Error loading products".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Error loading products");
    }

    #[tokio::test]
    async fn test_unauthorized_body_shape() {
        let body = body_json(AppError::Unauthorized.into_response()).await;
        assert_eq!(body, json!({ "error": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_error_envelope_carries_success_flag() {
        let err = AppError::NotFound("Mahsulot topilmadi".to_string());
        let body = body_json(err.into_response()).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Mahsulot topilmadi"));
    }

    #[tokio::test]
    async fn test_store_validation_is_aggregated() {
        let err = AppError::from_repository(
            "Mahsulot qo'shishda xatolik yuz berdi",
            RepositoryError::Validation(vec![
                "`sushi` is not a valid category".to_string(),
                "price must be greater than zero".to_string(),
            ]),
        );
        let body = body_json(err.into_response()).await;
        assert_eq!(
            body["error"],
            json!(
                "Validatsiya xatosi: `sushi` is not a valid category, price must be greater than zero"
            )
        );
    }
}
