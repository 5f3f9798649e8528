//! RankAlternativesHandler - Command handler for ranking and delivering results.
//!
//! Runs the ranking core, exports the result for attachment and, when a
//! recipient is given, hands it to the notifier. Computation and delivery
//! are separate outcomes: a delivery failure comes back as a warning next
//! to a valid result table.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::foundation::ValidationError;
use crate::domain::topsis::{RawTable, ResultTable, TopsisRanker};
use crate::ports::{ExportError, ExportedResult, NotificationError, Recipient, ResultExporter, ResultNotifier};

/// Command to rank a table of alternatives.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub table: RawTable,
    /// Comma-separated weights, e.g. `"1,1,2"`.
    pub weights: String,
    /// Comma-separated impacts, e.g. `"+,-,+"`.
    pub impacts: String,
    /// Email address to deliver the result to, if any.
    pub recipient: Option<String>,
}

/// What happened to result delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// No recipient was requested.
    Skipped,
    /// The notifier accepted the result.
    Delivered { message_id: Option<String> },
    /// The notifier failed; the result is still valid.
    Failed { warning: String },
}

impl DeliveryStatus {
    /// Returns the warning text for a failed delivery.
    pub fn warning(&self) -> Option<&str> {
        match self {
            DeliveryStatus::Failed { warning } => Some(warning),
            _ => None,
        }
    }
}

/// Result of a successful ranking.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub table: ResultTable,
    /// The exported attachment (what was, or would have been, delivered).
    pub attachment: ExportedResult,
    pub delivery: DeliveryStatus,
}

/// Errors that stop a ranking from being produced.
#[derive(Debug, Clone, Error)]
pub enum RankAlternativesError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidRecipient(NotificationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Handler for ranking alternatives.
pub struct RankAlternativesHandler {
    exporter: Arc<dyn ResultExporter>,
    notifier: Arc<dyn ResultNotifier>,
}

impl RankAlternativesHandler {
    pub fn new(exporter: Arc<dyn ResultExporter>, notifier: Arc<dyn ResultNotifier>) -> Self {
        Self { exporter, notifier }
    }

    pub async fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, RankAlternativesError> {
        // 1. Reject a malformed recipient before doing any work
        let recipient = cmd
            .recipient
            .as_deref()
            .map(Recipient::parse)
            .transpose()
            .map_err(RankAlternativesError::InvalidRecipient)?;

        // 2. Rank
        let table = TopsisRanker::rank(&cmd.table, &cmd.weights, &cmd.impacts)?;

        // 3. Export for delivery
        let attachment = self.exporter.export(&table)?;

        // 4. Deliver (failure is a warning, not an error)
        let delivery = match recipient {
            None => DeliveryStatus::Skipped,
            Some(recipient) => match self.notifier.deliver(&recipient, &attachment).await {
                Ok(receipt) => DeliveryStatus::Delivered {
                    message_id: receipt.message_id,
                },
                Err(err) => {
                    warn!(recipient = %recipient, error = %err, "Result delivery failed");
                    DeliveryStatus::Failed {
                        warning: err.to_string(),
                    }
                }
            },
        };

        info!(
            alternatives = table.len(),
            best = table.best().map(|r| r.identifier.as_str()).unwrap_or_default(),
            delivery = ?delivery,
            "Ranked alternatives"
        );

        Ok(RankAlternativesResult {
            table,
            attachment,
            delivery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::CsvResultExporter;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::DeliveryReceipt;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockNotifier {
        sent: Mutex<Vec<(String, ExportedResult)>>,
        fail: bool,
    }

    impl MockNotifier {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn sent(&self) -> Vec<(String, ExportedResult)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResultNotifier for MockNotifier {
        async fn deliver(
            &self,
            recipient: &Recipient,
            attachment: &ExportedResult,
        ) -> Result<DeliveryReceipt, NotificationError> {
            if self.fail {
                return Err(NotificationError::Transport("connection reset".to_string()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((recipient.to_string(), attachment.clone()));
            Ok(DeliveryReceipt {
                message_id: Some("msg-1".to_string()),
            })
        }
    }

    fn handler(notifier: Arc<MockNotifier>) -> RankAlternativesHandler {
        RankAlternativesHandler::new(Arc::new(CsvResultExporter::default()), notifier)
    }

    fn command(recipient: Option<&str>) -> RankAlternativesCommand {
        RankAlternativesCommand {
            table: RawTable::builder()
                .headers(vec!["Id", "C1", "C2"])
                .row(vec!["A", "1", "1"])
                .row(vec!["B", "2", "2"])
                .row(vec!["C", "3", "3"])
                .build(),
            weights: "1,1".to_string(),
            impacts: "+,+".to_string(),
            recipient: recipient.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn without_recipient_delivery_is_skipped() {
        let notifier = Arc::new(MockNotifier::new());
        let result = handler(notifier.clone()).handle(command(None)).await.unwrap();

        assert_eq!(result.delivery, DeliveryStatus::Skipped);
        assert_eq!(result.table.best().unwrap().identifier, "C");
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn with_recipient_result_is_delivered() {
        let notifier = Arc::new(MockNotifier::new());
        let result = handler(notifier.clone())
            .handle(command(Some("user@example.com")))
            .await
            .unwrap();

        assert_eq!(
            result.delivery,
            DeliveryStatus::Delivered {
                message_id: Some("msg-1".to_string())
            }
        );
        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "user@example.com");
        assert_eq!(sent[0].1.filename, "result.csv");
        assert_eq!(sent[0].1, result.attachment);
    }

    #[tokio::test]
    async fn delivery_failure_is_a_warning() {
        let notifier = Arc::new(MockNotifier::failing());
        let result = handler(notifier)
            .handle(command(Some("user@example.com")))
            .await
            .unwrap();

        assert_eq!(
            result.delivery.warning(),
            Some("Delivery transport failed: connection reset")
        );
        assert_eq!(result.table.len(), 3);
    }

    #[tokio::test]
    async fn invalid_recipient_fails_before_ranking() {
        let notifier = Arc::new(MockNotifier::new());
        let mut cmd = command(Some("not-an-email"));
        cmd.impacts = "+,x".to_string();

        let err = handler(notifier.clone()).handle(cmd).await.unwrap_err();
        assert!(matches!(err, RankAlternativesError::InvalidRecipient(_)));
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn validation_errors_are_returned() {
        let notifier = Arc::new(MockNotifier::new());
        let mut cmd = command(Some("user@example.com"));
        cmd.weights = "1,2,3".to_string();

        let err = handler(notifier.clone()).handle(cmd).await.unwrap_err();
        match err {
            RankAlternativesError::Validation(e) => assert_eq!(e.code(), ErrorCode::CardinalityError),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(notifier.sent().is_empty());
    }
}
