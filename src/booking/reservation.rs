//! Reservation snapshot stored in session attributes

use crate::lex::{SlotName, Slots};
use serde::{Deserialize, Serialize};

/// Session key holding the booking currently being collected
pub const CURRENT_RESERVATION_KEY: &str = "currentReservation";

/// Session key holding the most recently fulfilled booking
pub const LAST_CONFIRMED_RESERVATION_KEY: &str = "lastConfirmedReservation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationType {
    Movie,
}

/// Snapshot of the slot values for one booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Reservation {
    pub reservation_type: ReservationType,
    pub movie_name: Option<String>,
    pub theater_name: Option<String>,
    pub movie_date: Option<String>,
    pub movie_time: Option<String>,
    pub ticket_count: Option<i64>,
    pub mobile: Option<String>,
}

impl Reservation {
    pub fn from_slots(slots: &Slots) -> Self {
        let owned = |name| slots.get(name).map(ToString::to_string);
        Self {
            reservation_type: ReservationType::Movie,
            movie_name: owned(SlotName::MovieName),
            theater_name: owned(SlotName::TheaterName),
            movie_date: owned(SlotName::MovieDate),
            movie_time: owned(SlotName::MovieTime),
            ticket_count: slots
                .get(SlotName::TicketCount)
                .and_then(|count| count.trim().parse().ok()),
            mobile: owned(SlotName::Mobile),
        }
    }

    /// JSON form written into session attributes
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
