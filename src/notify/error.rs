//! Notification error types

use thiserror::Error;

/// Notification error with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct NotifyError {
    pub kind: NotifyErrorKind,
    pub message: String,
}

impl NotifyError {
    pub fn new(kind: NotifyErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::Network, message)
    }

    pub fn signing(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::Signing, message)
    }

    /// Classify a non-success HTTP status from the channel
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            401 | 403 => NotifyErrorKind::Auth,
            429 => NotifyErrorKind::Throttled,
            400..=499 => NotifyErrorKind::Rejected,
            500..=599 => NotifyErrorKind::ServerError,
            _ => NotifyErrorKind::Unknown,
        };
        Self::new(kind, format!("HTTP {status}: {body}"))
    }
}

/// Error classification, mostly for logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyErrorKind {
    /// Connection failures, timeouts
    Network,
    /// Could not sign the request
    Signing,
    /// Credentials rejected (401, 403)
    Auth,
    /// Rate limited (429)
    Throttled,
    /// Request rejected, e.g. a malformed phone number (other 4xx)
    Rejected,
    /// Channel-side failure (5xx)
    ServerError,
    Unknown,
}
