//! Wire types for the bot platform's code-hook protocol
//!
//! The inbound event and the outbound dialog action follow the Lex V1
//! code-hook contract; field names and nesting must not drift.

mod event;
mod response;
mod slots;

pub use event::{ConfirmationStatus, CurrentIntent, InvocationSource, LexEvent};
pub use response::{DialogAction, DialogResponse, FulfillmentState, Message};
pub use slots::{SlotName, Slots};

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Opaque string attributes the platform threads through every turn
pub type SessionAttributes = BTreeMap<String, String>;

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
