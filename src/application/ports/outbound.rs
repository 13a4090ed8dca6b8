//! Outbound ports: calls from use cases to third-party systems

use async_trait::async_trait;

use crate::domain::notification::{DispatchResult, ProviderEnvelope};
use crate::shared::errors::InfraError;

/// Transactional email provider.
///
/// One call is one delivery attempt. Implementations report transport
/// failures and non-success responses as [`InfraError`]; turning those into
/// a domain outcome is the caller's job.
#[async_trait]
pub trait MailProvider: Send + Sync {
    async fn send(
        &self,
        api_key: &str,
        envelope: &ProviderEnvelope,
    ) -> Result<DispatchResult, InfraError>;
}
