//! Customer notification channel
//!
//! Booking confirmations go out as SMS. The channel is a trait so the
//! runtime can be driven with a mock in tests.

mod error;
mod message;
mod sigv4;
mod sns;

pub use error::{NotifyError, NotifyErrorKind};
pub use message::{confirmation_text, normalize_phone_number};
pub use sigv4::Credentials;
pub use sns::{SnsConfig, SnsNotifier};

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for SMS channels
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a text message to an E.164 phone number
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<(), NotifyError>;

    /// Short channel name for logs
    fn channel(&self) -> &str;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<(), NotifyError> {
        (**self).send_sms(phone_number, message).await
    }

    fn channel(&self) -> &str {
        (**self).channel()
    }
}

/// Build the production notifier. Without SNS settings confirmations are
/// only logged.
pub fn from_config(config: Option<SnsConfig>) -> Arc<dyn Notifier> {
    let inner: Arc<dyn Notifier> = match config.map(SnsNotifier::new) {
        Some(Ok(sns)) => Arc::new(sns),
        Some(Err(e)) => {
            tracing::error!(error = %e, "Failed to set up SNS, confirmations disabled");
            Arc::new(DisabledNotifier)
        }
        None => Arc::new(DisabledNotifier),
    };
    Arc::new(LoggingNotifier::new(inner))
}

/// Logging wrapper for notifiers
pub struct LoggingNotifier {
    inner: Arc<dyn Notifier>,
}

impl LoggingNotifier {
    pub fn new(inner: Arc<dyn Notifier>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<(), NotifyError> {
        let start = std::time::Instant::now();
        let result = self.inner.send_sms(phone_number, message).await;
        let duration = start.elapsed();

        match &result {
            Ok(()) => {
                tracing::info!(
                    channel = %self.inner.channel(),
                    duration_ms = %duration.as_millis(),
                    "Confirmation sent"
                );
            }
            Err(e) => {
                tracing::error!(
                    channel = %self.inner.channel(),
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Confirmation failed"
                );
            }
        }

        result
    }

    fn channel(&self) -> &str {
        self.inner.channel()
    }
}

/// Stand-in used when no channel credentials are configured
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<(), NotifyError> {
        tracing::warn!(
            phone_number = %phone_number,
            message = %message,
            "No SMS channel configured, confirmation not sent"
        );
        Ok(())
    }

    fn channel(&self) -> &str {
        "disabled"
    }
}
