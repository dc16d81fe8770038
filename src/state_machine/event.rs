//! Events that drive the booking dialog

use crate::lex::{ConfirmationStatus, CurrentIntent, InvocationSource, Slots};

/// One inbound turn, classified by dialog phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The platform is still filling slots and wants them validated
    DialogCodeHook {
        slots: Slots,
        confirmation_status: ConfirmationStatus,
    },
    /// The user confirmed and the booking should be carried out
    FulfillmentCodeHook { slots: Slots },
}

impl Event {
    pub fn from_intent(intent: CurrentIntent, source: InvocationSource) -> Self {
        match source {
            InvocationSource::DialogCodeHook => Event::DialogCodeHook {
                slots: intent.slots,
                confirmation_status: intent.confirmation_status,
            },
            InvocationSource::FulfillmentCodeHook => Event::FulfillmentCodeHook {
                slots: intent.slots,
            },
        }
    }
}
