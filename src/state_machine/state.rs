//! Dialog state and per-turn context

use crate::booking::Catalog;
use crate::lex::SessionAttributes;
use chrono::NaiveDate;

/// Cross-turn state. The platform owns it and hands it back on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    pub session_attributes: SessionAttributes,
}

impl DialogState {
    pub fn new(session_attributes: SessionAttributes) -> Self {
        Self { session_attributes }
    }

    /// Encoded snapshot of the booking still being collected
    #[cfg(test)]
    pub fn current_reservation(&self) -> Option<&str> {
        self.session_attributes
            .get(crate::booking::CURRENT_RESERVATION_KEY)
            .map(String::as_str)
    }

    /// Encoded snapshot of the last fulfilled booking
    #[cfg(test)]
    pub fn last_confirmed_reservation(&self) -> Option<&str> {
        self.session_attributes
            .get(crate::booking::LAST_CONFIRMED_RESERVATION_KEY)
            .map(String::as_str)
    }
}

/// Read-only inputs to a transition that don't come from the platform
#[derive(Debug, Clone)]
pub struct TurnContext<'a> {
    pub intent_name: String,
    pub today: NaiveDate,
    pub catalog: &'a Catalog,
}

impl<'a> TurnContext<'a> {
    pub fn new(intent_name: impl Into<String>, today: NaiveDate, catalog: &'a Catalog) -> Self {
        Self {
            intent_name: intent_name.into(),
            today,
            catalog,
        }
    }
}
