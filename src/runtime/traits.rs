//! Trait abstractions for runtime I/O
//!
//! The clock is injected so "today" is deterministic in tests. The
//! notification channel lives behind `crate::notify::Notifier`.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Wall clock read in the theaters' time zone
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Local calendar date at `instant`, daylight saving included
    pub fn date_at(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.timezone).date_naive()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.date_at(Utc::now())
    }
}
