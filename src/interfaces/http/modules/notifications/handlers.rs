//! Email API handler

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::{EmailResponseDto, SendEmailRequest};
use crate::application::EmailService;
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson};

#[derive(Clone)]
pub struct NotificationHandlerState {
    pub service: Arc<EmailService>,
}

#[utoipa::path(
    post,
    path = "/notification/email/send",
    tag = "Notifications",
    request_body = SendEmailRequest,
    responses(
        (status = 200, description = "Email accepted by the provider", body = ApiResponse<EmailResponseDto>),
        (status = 422, description = "Validation error"),
        (status = 502, description = "Cannot send email")
    )
)]
pub async fn send_email(
    State(state): State<NotificationHandlerState>,
    ValidatedJson(request): ValidatedJson<SendEmailRequest>,
) -> Result<Json<ApiResponse<EmailResponseDto>>, ApiError> {
    let result = state.service.send(request.into()).await?;
    Ok(Json(ApiResponse::success(result.into())))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use tower::ServiceExt;

    use super::*;
    use crate::config::NotificationConfig;
    use crate::application::MailProvider;
    use crate::domain::{DispatchResult, ProviderEnvelope};
    use crate::shared::errors::InfraError;

    struct StubProvider {
        status: Option<u16>,
    }

    #[async_trait]
    impl MailProvider for StubProvider {
        async fn send(
            &self,
            _api_key: &str,
            _envelope: &ProviderEnvelope,
        ) -> Result<DispatchResult, InfraError> {
            match self.status {
                None => Ok(DispatchResult {
                    message_id: Some("<id@relay>".into()),
                }),
                Some(status) => Err(InfraError::UpstreamStatus {
                    status,
                    body: "{\"message\":\"Key not found\"}".into(),
                }),
            }
        }
    }

    fn app(status: Option<u16>) -> Router {
        let service = EmailService::new(
            Arc::new(StubProvider { status }),
            NotificationConfig::default(),
        );
        Router::new()
            .route("/notification/email/send", post(send_email))
            .with_state(NotificationHandlerState {
                service: Arc::new(service),
            })
    }

    fn request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/notification/email/send")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::http::Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "to": {"email": "a@b.com"},
            "subject": "hi",
            "htmlContent": "<p>hi</p>"
        })
    }

    #[tokio::test]
    async fn accepted_email_returns_message_id() {
        let resp = app(None).oneshot(request(valid_body())).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["code"], 1000);
        assert_eq!(body["result"]["messageId"], "<id@relay>");
    }

    #[tokio::test]
    async fn provider_rejection_is_opaque() {
        let resp = app(Some(401)).oneshot(request(valid_body())).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(resp).await;
        assert_eq!(body["code"], 1005);
        assert_eq!(body["message"], "Cannot send email");
        assert!(!body.to_string().contains("Key not found"));
    }

    #[tokio::test]
    async fn invalid_recipient_is_rejected_before_dispatch() {
        let resp = app(None)
            .oneshot(request(serde_json::json!({
                "to": {"email": "nope"},
                "subject": "hi",
                "htmlContent": "<p>hi</p>"
            })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
