//! Domain error to HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::response::ApiResponse;
use crate::domain::DomainError;

/// Numeric codes carried in the response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 1000,
    InvalidRequest = 1001,
    AlreadyExists = 1002,
    NotFound = 1004,
    EmailDispatch = 1005,
    Uncategorized = 9999,
}

impl ErrorCode {
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

/// Handler error: a [`DomainError`] rendered as an envelope with the
/// matching status code.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match &self.0 {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidRequest),
            DomainError::Conflict(_) => (StatusCode::CONFLICT, ErrorCode::AlreadyExists),
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            DomainError::EmailDispatch => (StatusCode::BAD_GATEWAY, ErrorCode::EmailDispatch),
            DomainError::Storage(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Uncategorized)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self.0 {
            DomainError::Storage(detail) => {
                error!("Storage failure: {}", detail);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ApiResponse::error(code, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_and_code() {
        let cases = [
            (DomainError::Validation("x".into()), StatusCode::BAD_REQUEST, 1001),
            (DomainError::Conflict("x".into()), StatusCode::CONFLICT, 1002),
            (DomainError::not_found("Product", "1"), StatusCode::NOT_FOUND, 1004),
            (DomainError::EmailDispatch, StatusCode::BAD_GATEWAY, 1005),
            (DomainError::Storage("x".into()), StatusCode::INTERNAL_SERVER_ERROR, 9999),
        ];
        for (err, status, code) in cases {
            let (s, c) = ApiError(err).status_and_code();
            assert_eq!(s, status);
            assert_eq!(c.as_u32(), code);
        }
    }

    #[tokio::test]
    async fn storage_detail_is_not_exposed() {
        let response = ApiError(DomainError::Storage("disk on fire".into())).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 9999);
        assert_eq!(body["message"], "Internal server error");
    }
}
