//! Brevo transactional email client
//!
//! `POST {base_url}/v3/smtp/email` with the API key in the `api-key` header.
//! Any 2xx is a success; the body is read for a `messageId` when present.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::application::MailProvider;
use crate::config::NotificationConfig;
use crate::domain::{DispatchResult, ProviderEnvelope};
use crate::shared::errors::InfraError;

const SEND_PATH: &str = "/v3/smtp/email";

pub struct BrevoClient {
    client: Client,
    endpoint: String,
}

impl BrevoClient {
    pub fn new(config: &NotificationConfig) -> Result<Self, InfraError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: format!("{}{}", config.brevo_base_url.trim_end_matches('/'), SEND_PATH),
        })
    }
}

#[async_trait]
impl MailProvider for BrevoClient {
    async fn send(
        &self,
        api_key: &str,
        envelope: &ProviderEnvelope,
    ) -> Result<DispatchResult, InfraError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", api_key)
            .header("accept", "application/json")
            .json(envelope)
            .send()
            .await?;

        let status = response.status();
        debug!("Brevo response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(InfraError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        // An empty or unexpected success body still counts as delivered
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::domain::{EmailIntent, Sender};

    fn envelope() -> ProviderEnvelope {
        ProviderEnvelope::from_intent(
            Sender {
                name: "Study Tracker".into(),
                email: "no-reply@studytracker.app".into(),
            },
            EmailIntent {
                recipient: "a@b.com".into(),
                recipient_name: None,
                subject: "hi".into(),
                html_body: "<p>hi</p>".into(),
            },
        )
    }

    fn client_for(server: &MockServer) -> BrevoClient {
        BrevoClient::new(&NotificationConfig {
            brevo_base_url: server.base_url(),
            timeout_secs: Some(5),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn posts_envelope_with_api_key_header() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v3/smtp/email")
                    .header("api-key", "test-key")
                    .json_body(json!({
                        "sender": {"name": "Study Tracker", "email": "no-reply@studytracker.app"},
                        "to": [{"email": "a@b.com"}],
                        "subject": "hi",
                        "htmlContent": "<p>hi</p>"
                    }));
                then.status(201)
                    .header("content-type", "application/json")
                    .json_body(json!({"messageId": "<201@smtp-relay.mailin.fr>"}));
            })
            .await;

        let result = client_for(&server).send("test-key", &envelope()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.message_id.as_deref(), Some("<201@smtp-relay.mailin.fr>"));
    }

    #[tokio::test]
    async fn success_without_body_is_still_success() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v3/smtp/email");
                then.status(202);
            })
            .await;

        let result = client_for(&server).send("k", &envelope()).await.unwrap();
        assert!(result.message_id.is_none());
    }

    #[tokio::test]
    async fn unauthorized_is_upstream_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v3/smtp/email");
                then.status(401)
                    .json_body(json!({"code": "unauthorized", "message": "Key not found"}));
            })
            .await;

        let err = client_for(&server).send("bad", &envelope()).await.unwrap_err();
        match err {
            InfraError::UpstreamStatus { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Key not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_provider_is_http_error() {
        let client = BrevoClient::new(&NotificationConfig {
            brevo_base_url: "http://127.0.0.1:1".into(),
            timeout_secs: Some(1),
            ..Default::default()
        })
        .unwrap();

        let err = client.send("k", &envelope()).await.unwrap_err();
        assert!(matches!(err, InfraError::Http(_)));
    }
}
