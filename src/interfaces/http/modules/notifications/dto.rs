//! Email DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{DispatchResult, EmailIntent};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecipientDto {
    #[validate(email(message = "invalid recipient email"))]
    pub email: String,
    pub name: Option<String>,
}

/// Send email request. The sender is fixed by the service.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    #[validate(nested)]
    pub to: RecipientDto,
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "htmlContent is required"))]
    pub html_content: String,
}

impl From<SendEmailRequest> for EmailIntent {
    fn from(r: SendEmailRequest) -> Self {
        Self {
            recipient: r.to.email,
            recipient_name: r.to.name,
            subject: r.subject,
            html_body: r.html_content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailResponseDto {
    /// Provider message id, when the provider returned one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl From<DispatchResult> for EmailResponseDto {
    fn from(r: DispatchResult) -> Self {
        Self {
            message_id: r.message_id,
        }
    }
}
