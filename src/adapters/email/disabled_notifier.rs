//! Notifier used when email delivery is not configured.

use async_trait::async_trait;

use crate::ports::{DeliveryReceipt, ExportedResult, NotificationError, Recipient, ResultNotifier};

/// Refuses every delivery with `NotConfigured`.
///
/// Lets a caller request delivery without credentials and still get its
/// result, with the refusal surfaced as a warning.
#[derive(Debug, Clone)]
pub struct DisabledNotifier {
    reason: String,
}

impl DisabledNotifier {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for DisabledNotifier {
    fn default() -> Self {
        Self::new("RESEND_API_KEY not set")
    }
}

#[async_trait]
impl ResultNotifier for DisabledNotifier {
    async fn deliver(
        &self,
        _recipient: &Recipient,
        _attachment: &ExportedResult,
    ) -> Result<DeliveryReceipt, NotificationError> {
        Err(NotificationError::NotConfigured(self.reason.clone()))
    }
}
