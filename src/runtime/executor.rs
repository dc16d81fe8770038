//! Dialog runtime executor

use super::traits::Clock;
use super::{DispatchError, Intent};
use crate::booking::{Catalog, LAST_CONFIRMED_RESERVATION_KEY};
use crate::lex::{DialogResponse, LexEvent};
use crate::notify::{confirmation_text, normalize_phone_number, Notifier};
use crate::state_machine::{transition, DialogState, Effect, Event, TurnContext};

/// Handles one turn at a time with any notifier and clock implementation
pub struct DialogRuntime<N, C>
where
    N: Notifier,
    C: Clock,
{
    catalog: Catalog,
    notifier: N,
    clock: C,
}

impl<N, C> DialogRuntime<N, C>
where
    N: Notifier,
    C: Clock,
{
    pub fn new(catalog: Catalog, notifier: N, clock: C) -> Self {
        Self {
            catalog,
            notifier,
            clock,
        }
    }

    #[cfg(test)]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Route an event to its intent handler
    pub async fn dispatch(&self, event: LexEvent) -> Result<DialogResponse, DispatchError> {
        tracing::debug!(
            user_id = %event.user_id,
            bot = %event.bot.name,
            bot_alias = ?event.bot.alias,
            bot_version = ?event.bot.version,
            message_version = ?event.message_version,
            transcript = ?event.input_transcript,
            intent = %event.current_intent.name,
            source = ?event.invocation_source,
            "Dispatching turn"
        );

        match event.current_intent.name.parse::<Intent>()? {
            Intent::BookMovie => Ok(self.book_movie(event).await),
        }
    }

    async fn book_movie(&self, event: LexEvent) -> DialogResponse {
        let context = TurnContext::new(Intent::BookMovie.as_str(), self.clock.today(), &self.catalog);
        let state = DialogState::new(event.session_attributes);
        let turn = Event::from_intent(event.current_intent, event.invocation_source);
        let fulfilling = matches!(turn, Event::FulfillmentCodeHook { .. });

        let result = transition(&state, &context, turn);

        if fulfilling {
            tracing::debug!(
                reservation = ?result.response.session_attributes.get(LAST_CONFIRMED_RESERVATION_KEY),
                "Booking fulfilled"
            );
        }

        for effect in result.effects {
            self.execute_effect(effect).await;
        }

        result.response
    }

    /// Effects never fail the turn; errors are logged and dropped
    async fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::SendConfirmation { reservation } => {
                let Some(mobile) = reservation.mobile.as_deref() else {
                    tracing::warn!("Booking confirmed without a mobile number, skipping SMS");
                    return;
                };
                let phone_number = normalize_phone_number(mobile);
                let text = confirmation_text(&reservation);

                if let Err(e) = self.notifier.send_sms(&phone_number, &text).await {
                    tracing::error!(
                        channel = %self.notifier.channel(),
                        error = %e,
                        "Failed to send booking confirmation"
                    );
                }
            }
        }
    }
}
