//! Effects produced by state transitions

use crate::booking::Reservation;

/// Effects to be executed after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Text the booking summary to the customer's mobile number
    SendConfirmation { reservation: Reservation },
}

impl Effect {
    pub fn send_confirmation(reservation: Reservation) -> Self {
        Effect::SendConfirmation { reservation }
    }
}
