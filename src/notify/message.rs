//! Confirmation text and phone number formatting

use crate::booking::Reservation;
use std::fmt::Write;

/// Country code assumed when the number has none
const DEFAULT_COUNTRY_PREFIX: &str = "+1";

const MISSING: &str = "-";

/// E.164-style number for the SMS channel
pub fn normalize_phone_number(mobile: &str) -> String {
    let mobile = mobile.trim();
    if mobile.starts_with('+') {
        mobile.to_string()
    } else {
        format!("{DEFAULT_COUNTRY_PREFIX}{mobile}")
    }
}

/// Booking summary texted to the customer
pub fn confirmation_text(reservation: &Reservation) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or(MISSING).to_string();
    let tickets = reservation
        .ticket_count
        .map_or_else(|| MISSING.to_string(), |count| count.to_string());

    let mut text = String::from("Your booking is confirmed.\nSummary of tickets:\n");
    let _ = writeln!(text, "Movie: {}", field(&reservation.movie_name));
    let _ = writeln!(text, "Theater: {}", field(&reservation.theater_name));
    let _ = writeln!(
        text,
        "Date: {} {}",
        field(&reservation.movie_date),
        field(&reservation.movie_time)
    );
    let _ = writeln!(text, "Total ticket: {tickets}");
    text.push_str("\nThank you for booking with chatbot.");
    text
}
