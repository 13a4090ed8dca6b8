//! Query string extractor for Axum
//!
//! `ApiQuery<T>` works like `axum::extract::Query<T>`, but a query string
//! that fails to deserialize is rejected with 400 as an envelope carrying
//! code 1001 instead of axum's plain-text body.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use super::{ApiResponse, ErrorCode};

/// An extractor that deserializes the query string into `T`.
pub struct ApiQuery<T>(pub T);

/// Error type for `ApiQuery` extraction failures.
pub struct ApiQueryRejection(QueryRejection);

impl IntoResponse for ApiQueryRejection {
    fn into_response(self) -> Response {
        let body = ApiResponse::error(
            ErrorCode::InvalidRequest,
            format!("Invalid query: {}", self.0.body_text()),
        );
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ApiQueryRejection)?;
        Ok(ApiQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct Paging {
        page: Option<u64>,
    }

    async fn handler(ApiQuery(q): ApiQuery<Paging>) -> String {
        q.page.unwrap_or_default().to_string()
    }

    async fn get_uri(uri: &str) -> (StatusCode, Vec<u8>) {
        let app = Router::new().route("/test", get(handler));
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn well_formed_query_is_extracted() {
        let (status, body) = get_uri("/test?page=4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"4");
    }

    #[tokio::test]
    async fn malformed_query_returns_envelope() {
        let (status, body) = get_uri("/test?page=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 1001);
        assert!(json["message"].as_str().unwrap().contains("page"));
    }
}
