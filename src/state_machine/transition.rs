//! Pure state transition function

use super::{DialogState, Effect, Event, TurnContext};
use crate::booking::{
    validate, Reservation, ValidationResult, CURRENT_RESERVATION_KEY,
    LAST_CONFIRMED_RESERVATION_KEY,
};
use crate::lex::{ConfirmationStatus, DialogResponse, FulfillmentState, Message};

pub const BOOKING_CONFIRMED_MESSAGE: &str = "Thank you! Your booking is confirmed.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub response: DialogResponse,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(response: DialogResponse) -> Self {
        Self {
            response,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Pure transition function
///
/// Given the same inputs it always produces the same response and effects.
/// Every event has exactly one outcome, so there is no error path.
pub fn transition(state: &DialogState, context: &TurnContext<'_>, event: Event) -> TransitionResult {
    let mut session_attributes = state.session_attributes.clone();

    match event {
        // Validation pass: re-elicit the first bad slot, otherwise hand back
        // to the platform's own slot filling and confirmation prompts.
        Event::DialogCodeHook {
            mut slots,
            confirmation_status,
        } => {
            let reservation = Reservation::from_slots(&slots);
            session_attributes.insert(CURRENT_RESERVATION_KEY.to_string(), reservation.encode());

            match validate(&slots, context.catalog, context.today) {
                ValidationResult::Invalid {
                    violated_slot,
                    message,
                } => {
                    slots.clear(violated_slot);
                    TransitionResult::new(DialogResponse::elicit_slot(
                        session_attributes,
                        context.intent_name.as_str(),
                        slots,
                        violated_slot,
                        Message::plain_text(message),
                    ))
                }
                ValidationResult::Valid if confirmation_status == ConfirmationStatus::Confirmed => {
                    TransitionResult::new(DialogResponse::delegate(session_attributes, slots))
                        .with_effect(Effect::send_confirmation(reservation))
                }
                ValidationResult::Valid => {
                    TransitionResult::new(DialogResponse::delegate(session_attributes, slots))
                }
            }
        }

        // Fulfilment pass: validation already happened on earlier turns
        Event::FulfillmentCodeHook { slots } => {
            let reservation = Reservation::from_slots(&slots);
            session_attributes.remove(CURRENT_RESERVATION_KEY);
            session_attributes.insert(
                LAST_CONFIRMED_RESERVATION_KEY.to_string(),
                reservation.encode(),
            );

            TransitionResult::new(DialogResponse::close(
                session_attributes,
                FulfillmentState::Fulfilled,
                Message::plain_text(BOOKING_CONFIRMED_MESSAGE),
            ))
        }
    }
}
