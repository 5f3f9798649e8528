//! Email adapters - `ResultNotifier` implementations.

mod disabled_notifier;
mod resend_notifier;

use std::sync::Arc;

use crate::config::EmailConfig;
use crate::ports::ResultNotifier;

pub use disabled_notifier::DisabledNotifier;
pub use resend_notifier::{ResendNotifier, ResendSettings};

/// Builds the notifier for the given email configuration.
///
/// Missing or invalid settings give a [`DisabledNotifier`] carrying the
/// reason, so the problem only surfaces when a delivery is attempted.
pub fn notifier_from_config(config: &EmailConfig) -> Arc<dyn ResultNotifier> {
    if !config.is_configured() {
        return Arc::new(DisabledNotifier::default());
    }
    match ResendNotifier::from_config(config) {
        Ok(notifier) => Arc::new(notifier),
        Err(err) => {
            tracing::debug!(error = %err, "Email delivery disabled");
            Arc::new(DisabledNotifier::new(err.to_string()))
        }
    }
}
