//! Email dispatch service
//!
//! Turns an [`EmailIntent`] into a provider call. The sender identity is
//! fixed by configuration and every provider failure is reported as the
//! same opaque [`DomainError::EmailDispatch`].

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ports::MailProvider;
use crate::config::NotificationConfig;
use crate::domain::{
    DispatchResult, DomainError, DomainResult, EmailIntent, ProviderEnvelope, Sender,
};

pub struct EmailService {
    provider: Arc<dyn MailProvider>,
    config: NotificationConfig,
}

impl EmailService {
    pub fn new(provider: Arc<dyn MailProvider>, config: NotificationConfig) -> Self {
        Self { provider, config }
    }

    fn sender(&self) -> Sender {
        Sender {
            name: self.config.sender_name.clone(),
            email: self.config.sender_email.clone(),
        }
    }

    /// Send one email. Single attempt, no retry.
    pub async fn send(&self, intent: EmailIntent) -> DomainResult<DispatchResult> {
        let envelope = ProviderEnvelope::from_intent(self.sender(), intent);
        let api_key = self.config.api_key();

        match self.provider.send(&api_key, &envelope).await {
            Ok(result) => {
                metrics::counter!("emails_dispatched_total", "outcome" => "sent").increment(1);
                info!(
                    subject = %envelope.subject,
                    message_id = result.message_id.as_deref().unwrap_or("-"),
                    "Email dispatched"
                );
                Ok(result)
            }
            Err(e) => {
                metrics::counter!("emails_dispatched_total", "outcome" => "failed").increment(1);
                warn!(subject = %envelope.subject, error = %e, "Email provider call failed");
                Err(DomainError::EmailDispatch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::shared::errors::InfraError;

    #[derive(Default)]
    struct FakeProvider {
        fail_with: Option<u16>,
        calls: Mutex<Vec<ProviderEnvelope>>,
    }

    #[async_trait]
    impl MailProvider for FakeProvider {
        async fn send(
            &self,
            _api_key: &str,
            envelope: &ProviderEnvelope,
        ) -> Result<DispatchResult, InfraError> {
            self.calls.lock().unwrap().push(envelope.clone());
            match self.fail_with {
                Some(status) => Err(InfraError::UpstreamStatus {
                    status,
                    body: r#"{"code":"unauthorized","message":"Key not found"}"#.into(),
                }),
                None => Ok(DispatchResult {
                    message_id: Some("<abc@smtp-relay>".into()),
                }),
            }
        }
    }

    fn intent() -> EmailIntent {
        EmailIntent {
            recipient: "a@b.com".into(),
            recipient_name: None,
            subject: "hi".into(),
            html_body: "<p>hi</p>".into(),
        }
    }

    fn config() -> NotificationConfig {
        NotificationConfig {
            sender_name: "Study Tracker".into(),
            sender_email: "no-reply@studytracker.app".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn success_returns_dispatch_result() {
        let provider = Arc::new(FakeProvider::default());
        let service = EmailService::new(provider.clone(), config());

        let result = service.send(intent()).await.unwrap();
        assert_eq!(result.message_id.as_deref(), Some("<abc@smtp-relay>"));

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].sender.name, "Study Tracker");
        assert_eq!(calls[0].sender.email, "no-reply@studytracker.app");
        assert_eq!(calls[0].to.len(), 1);
        assert_eq!(calls[0].to[0].email, "a@b.com");
    }

    #[tokio::test]
    async fn provider_failure_is_opaque_and_not_retried() {
        let provider = Arc::new(FakeProvider {
            fail_with: Some(401),
            ..Default::default()
        });
        let service = EmailService::new(provider.clone(), config());

        let err = service.send(intent()).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailDispatch));
        assert_eq!(err.to_string(), "Cannot send email");
        assert_eq!(provider.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_is_opaque() {
        let unreachable = NotificationConfig {
            brevo_base_url: "http://127.0.0.1:1".into(),
            brevo_api_key: "test-key".into(),
            timeout_secs: Some(2),
            ..config()
        };
        let provider = Arc::new(crate::infrastructure::BrevoClient::new(&unreachable).unwrap());
        let service = EmailService::new(provider, unreachable);

        let err = service.send(intent()).await.unwrap_err();
        assert!(matches!(err, DomainError::EmailDispatch));
        assert_eq!(err.to_string(), "Cannot send email");
    }
}
