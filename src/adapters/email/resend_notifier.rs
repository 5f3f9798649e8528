//! Resend email notifier.
//!
//! Implements `ResultNotifier` by posting to the Resend `/emails` endpoint
//! with the exported result attached.
//!
//! # Configuration
//!
//! ```ignore
//! let notifier = ResendNotifier::from_config(&config.email)?;
//! ```

use async_trait::async_trait;
use base64::Engine as _;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::{EmailConfig, ValidationError as ConfigValidationError};
use crate::ports::{DeliveryReceipt, ExportedResult, NotificationError, Recipient, ResultNotifier};

/// Body of the notification email.
const EMAIL_HTML_BODY: &str = "<h3>Your TOPSIS result is attached</h3>";

/// Resend API settings.
#[derive(Clone)]
pub struct ResendSettings {
    /// Resend API key (re_...).
    api_key: SecretString,

    /// Formatted "From" header.
    from: String,

    /// Subject line.
    subject: String,

    /// Base URL for the Resend API (default: https://api.resend.com).
    api_base_url: String,
}

impl ResendSettings {
    /// Create settings with default sender, subject and base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        let defaults = EmailConfig::default();
        Self {
            api_key: SecretString::new(api_key.into()),
            from: defaults.from_email,
            subject: defaults.subject,
            api_base_url: defaults.api_base_url,
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the sender.
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Set the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    attachments: Vec<Attachment<'a>>,
}

#[derive(Debug, Serialize)]
struct Attachment<'a> {
    filename: &'a str,
    /// Base64 encoded file content.
    content: String,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Email notifier backed by the Resend HTTP API.
pub struct ResendNotifier {
    settings: ResendSettings,
    http_client: reqwest::Client,
}

impl ResendNotifier {
    /// Create a notifier with the given settings.
    pub fn new(settings: ResendSettings) -> Self {
        Self {
            settings,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create a notifier from validated email configuration.
    pub fn from_config(config: &EmailConfig) -> Result<Self, ConfigValidationError> {
        config.validate()?;
        let settings = ResendSettings::new(config.resend_api_key.clone())
            .with_from(config.from_header())
            .with_subject(config.subject.clone())
            .with_base_url(config.api_base_url.clone());
        Ok(Self::new(settings))
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.settings.api_base_url.trim_end_matches('/'))
    }

    fn request_body<'a>(
        &'a self,
        recipient: &'a Recipient,
        attachment: &'a ExportedResult,
    ) -> SendEmailRequest<'a> {
        SendEmailRequest {
            from: &self.settings.from,
            to: vec![recipient.as_str()],
            subject: &self.settings.subject,
            html: EMAIL_HTML_BODY,
            attachments: vec![Attachment {
                filename: &attachment.filename,
                content: base64::engine::general_purpose::STANDARD
                    .encode(attachment.content.as_bytes()),
            }],
        }
    }
}

#[async_trait]
impl ResultNotifier for ResendNotifier {
    async fn deliver(
        &self,
        recipient: &Recipient,
        attachment: &ExportedResult,
    ) -> Result<DeliveryReceipt, NotificationError> {
        let body = self.request_body(recipient, attachment);

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(self.settings.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Resend request failed: {}", e);
                NotificationError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Resend rejected email");
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let message_id = response
            .json::<SendEmailResponse>()
            .await
            .ok()
            .and_then(|r| r.id);

        tracing::debug!(recipient = %recipient, message_id = ?message_id, "Result email sent");

        Ok(DeliveryReceipt { message_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;

    fn attachment() -> ExportedResult {
        ExportedResult::new("Id,Rank\nA,1\n".to_string(), ExportFormat::Csv, "result")
    }

    #[test]
    fn request_body_encodes_attachment() {
        let notifier = ResendNotifier::new(ResendSettings::new("re_test"));
        let recipient = Recipient::parse("user@example.com").unwrap();
        let attachment = attachment();

        let body = serde_json::to_value(notifier.request_body(&recipient, &attachment)).unwrap();

        assert_eq!(body["to"][0], "user@example.com");
        assert_eq!(body["subject"], "TOPSIS Result");
        assert_eq!(body["from"], "onboarding@resend.dev");
        assert_eq!(body["attachments"][0]["filename"], "result.csv");
        assert_eq!(body["attachments"][0]["content"], "SWQsUmFuawpBLDEK");
    }

    #[test]
    fn from_config_uses_configured_sender_and_subject() {
        let config = EmailConfig {
            resend_api_key: "re_test".to_string(),
            from_email: "ranker@example.com".to_string(),
            from_name: "Ranker".to_string(),
            subject: "Your ranking".to_string(),
            ..Default::default()
        };
        let notifier = ResendNotifier::from_config(&config).unwrap();
        let recipient = Recipient::parse("user@example.com").unwrap();
        let attachment = attachment();

        let body = serde_json::to_value(notifier.request_body(&recipient, &attachment)).unwrap();
        assert_eq!(body["from"], "Ranker <ranker@example.com>");
        assert_eq!(body["subject"], "Your ranking");
    }

    #[test]
    fn from_config_rejects_missing_key() {
        let result = ResendNotifier::from_config(&EmailConfig::default());
        assert!(matches!(result, Err(ConfigValidationError::MissingRequired(_))));
    }

    #[test]
    fn endpoint_joins_base_url() {
        let notifier =
            ResendNotifier::new(ResendSettings::new("re_test").with_base_url("http://localhost:9/"));
        assert_eq!(notifier.endpoint(), "http://localhost:9/emails");
    }

    #[tokio::test]
    async fn unreachable_api_is_transport_error() {
        let notifier =
            ResendNotifier::new(ResendSettings::new("re_test").with_base_url("http://127.0.0.1:1"));
        let recipient = Recipient::parse("user@example.com").unwrap();

        let result = notifier.deliver(&recipient, &attachment()).await;
        assert!(matches!(result, Err(NotificationError::Transport(_))));
    }
}
