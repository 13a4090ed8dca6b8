//! Email intent and provider envelope

use serde::{Deserialize, Serialize};

/// A request to send one email, as expressed by a caller
#[derive(Debug, Clone, PartialEq)]
pub struct EmailIntent {
    pub recipient: String,
    pub recipient_name: Option<String>,
    pub subject: String,
    pub html_body: String,
}

/// Sender identity owned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Provider request body. Lives for the duration of one outbound call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderEnvelope {
    pub sender: Sender,
    pub to: Vec<Recipient>,
    pub subject: String,
    pub html_content: String,
}

impl ProviderEnvelope {
    /// Wrap `intent` for delivery from `sender` to exactly one recipient.
    pub fn from_intent(sender: Sender, intent: EmailIntent) -> Self {
        Self {
            sender,
            to: vec![Recipient {
                email: intent.recipient,
                name: intent.recipient_name,
            }],
            subject: intent.subject,
            html_content: intent.html_body,
        }
    }
}

/// Outcome of a successful dispatch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_has_single_recipient_and_provider_field_names() {
        let envelope = ProviderEnvelope::from_intent(
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
        );

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sender": {"name": "Study Tracker", "email": "no-reply@studytracker.app"},
                "to": [{"email": "a@b.com"}],
                "subject": "hi",
                "htmlContent": "<p>hi</p>"
            })
        );
    }
}
