//! Inbound code-hook event

use super::{null_as_default, SessionAttributes, Slots};
use serde::Deserialize;

/// Event the platform posts for every conversation turn
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexEvent {
    pub current_intent: CurrentIntent,
    pub invocation_source: InvocationSource,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_attributes: SessionAttributes,
    pub bot: BotInfo,
    pub user_id: String,
    #[serde(default)]
    pub input_transcript: Option<String>,
    #[serde(default)]
    pub message_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Slots,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
}

/// Whether the user has answered the confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ConfirmationStatus {
    #[default]
    None,
    Confirmed,
    Denied,
}

/// Which phase of the dialog the platform is calling us for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum InvocationSource {
    /// Slots are still being collected and validated
    DialogCodeHook,
    /// The user confirmed and the intent should be carried out
    FulfillmentCodeHook,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotInfo {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}
