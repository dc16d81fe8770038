//! Booking dialog state machine
//!
//! Pure transitions: a turn's state, context and event go in, the response
//! and the side effects to run come out. The runtime executes the effects.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{DialogState, TurnContext};
pub use transition::{transition, TransitionResult};
