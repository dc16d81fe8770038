//! Mock implementations for testing
//!
//! These mocks enable runtime tests without real I/O.

use super::traits::Clock;
use crate::notify::{Notifier, NotifyError, NotifyErrorKind};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ============================================================================
// Mock Notifier
// ============================================================================

/// Notifier that records every message instead of sending it
#[derive(Default)]
pub struct MockNotifier {
    /// Record of (phone number, message) pairs
    pub sent: Mutex<Vec<(String, String)>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((phone_number.to_string(), message.to_string()));
        Ok(())
    }

    fn channel(&self) -> &str {
        "mock"
    }
}

// ============================================================================
// Failing Notifier
// ============================================================================

/// Notifier whose every send fails with the given kind
pub struct FailingNotifier {
    kind: NotifyErrorKind,
    attempts: AtomicUsize,
}

impl FailingNotifier {
    pub fn new(kind: NotifyErrorKind) -> Self {
        Self {
            kind,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send_sms(&self, _phone_number: &str, _message: &str) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(NotifyError::new(self.kind, "mock failure"))
    }

    fn channel(&self) -> &str {
        "failing"
    }
}

// ============================================================================
// Fixed Clock
// ============================================================================

/// Clock pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
