//! Response envelope

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::ErrorCode;

/// Envelope around every REST response.
///
/// Success: `{"code": 1000, "result": {...}}`.
/// Failure: `{"code": <error code>, "message": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `1000` on success, otherwise an error code
    pub code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            code: ErrorCode::Success.as_u32(),
            message: None,
            result: Some(result),
        }
    }
}

impl ApiResponse<()> {
    /// Success with no payload
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success.as_u32(),
            message: Some(message.into()),
            result: None,
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.as_u32(),
            message: Some(message.into()),
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_message() {
        let json = serde_json::to_value(ApiResponse::success(5)).unwrap();
        assert_eq!(json, serde_json::json!({"code": 1000, "result": 5}));
    }

    #[test]
    fn error_omits_result() {
        let json =
            serde_json::to_value(ApiResponse::error(ErrorCode::NotFound, "missing")).unwrap();
        assert_eq!(json, serde_json::json!({"code": 1004, "message": "missing"}));
    }
}
