//! Result Notifier Port - Out-of-band delivery of a ranked result.
//!
//! Delivery is independent of computation: a failed delivery never
//! invalidates the result table, it is reported as a warning instead.
//! Implementations own their credentials; nothing upstream sees them.

use async_trait::async_trait;
use thiserror::Error;

use super::ExportedResult;

/// Port for delivering an exported result to a recipient.
///
/// # Contract
///
/// - One attempt per call; retries are the caller's decision
/// - `deliver` must not mutate or re-read the result
#[async_trait]
pub trait ResultNotifier: Send + Sync {
    /// Sends `attachment` to `recipient`.
    async fn deliver(
        &self,
        recipient: &Recipient,
        attachment: &ExportedResult,
    ) -> Result<DeliveryReceipt, NotificationError>;
}

/// A validated email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient(String);

impl Recipient {
    /// Parses an address; it must be non-empty and contain a single `@`
    /// with text on both sides.
    pub fn parse(address: &str) -> Result<Self, NotificationError> {
        let trimmed = address.trim();
        let mut parts = trimmed.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(NotificationError::InvalidRecipient(address.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Acknowledgement from the delivery provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Provider message id, if it returned one.
    pub message_id: Option<String>,
}

/// Errors that can occur during delivery.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Invalid recipient address: '{0}'")]
    InvalidRecipient(String),

    #[error("Notifier not configured: {0}")]
    NotConfigured(String),

    #[error("Delivery transport failed: {0}")]
    Transport(String),

    #[error("Delivery rejected by provider (status {status}): {body}")]
    Rejected { status: u16, body: String },
}
