//! Outbound dialog-action directives

use super::{SessionAttributes, SlotName, Slots};
use serde::Serialize;

/// Response returned to the platform for a single turn
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

/// What the platform should do next
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    /// Ask the user for one slot again
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: SlotName,
        message: Message,
    },
    /// Ask the user to confirm the intent
    #[allow(dead_code)] // Part of the dialog-action contract
    #[serde(rename_all = "camelCase")]
    ConfirmIntent {
        intent_name: String,
        slots: Slots,
        message: Message,
    },
    /// Let the platform's own slot filling decide the next prompt
    Delegate { slots: Slots },
    /// End the conversation
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FulfillmentState {
    Fulfilled,
    #[allow(dead_code)] // Part of the dialog-action contract
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentType {
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

impl DialogResponse {
    pub fn elicit_slot(
        session_attributes: SessionAttributes,
        intent_name: impl Into<String>,
        slots: Slots,
        slot_to_elicit: SlotName,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ElicitSlot {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit,
                message,
            },
        }
    }

    #[cfg(test)]
    pub fn confirm_intent(
        session_attributes: SessionAttributes,
        intent_name: impl Into<String>,
        slots: Slots,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ConfirmIntent {
                intent_name: intent_name.into(),
                slots,
                message,
            },
        }
    }

    pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Delegate { slots },
        }
    }

    pub fn close(
        session_attributes: SessionAttributes,
        fulfillment_state: FulfillmentState,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Close {
                fulfillment_state,
                message,
            },
        }
    }
}
