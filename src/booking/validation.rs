//! Slot validation
//!
//! Checks run in a fixed order and the first failure wins. Unfilled slots are
//! never a validation failure; the platform elicits those on its own.

use super::Catalog;
use crate::lex::{SlotName, Slots};
use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_TICKETS: i64 = 1;
pub const MAX_TICKETS: i64 = 10;

/// Bookings must fall in `[today, today + BOOKING_WINDOW_DAYS)`
pub const BOOKING_WINDOW_DAYS: u64 = 30;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Optional `+` and 1-3 digit country code, then a 10-11 digit number
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+?[0-9]{1,3})?[0-9]{10,11}$").expect("valid regex"));

/// Outcome of validating one slot set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid {
        violated_slot: SlotName,
        message: String,
    },
}

struct Violation {
    slot: SlotName,
    message: String,
}

impl Violation {
    fn new(slot: SlotName, message: impl Into<String>) -> Self {
        Self {
            slot,
            message: message.into(),
        }
    }
}

/// Validate every filled slot against the booking rules
pub fn validate(slots: &Slots, catalog: &Catalog, today: NaiveDate) -> ValidationResult {
    match run_checks(slots, catalog, today) {
        Ok(()) => ValidationResult::Valid,
        Err(violation) => ValidationResult::Invalid {
            violated_slot: violation.slot,
            message: violation.message,
        },
    }
}

fn run_checks(slots: &Slots, catalog: &Catalog, today: NaiveDate) -> Result<(), Violation> {
    if let Some(movie) = non_empty(slots.get(SlotName::MovieName)) {
        check_movie(movie, catalog)?;
    }
    if let Some(theater) = non_empty(slots.get(SlotName::TheaterName)) {
        check_theater(theater, catalog)?;
    }
    if let Some(date) = non_empty(slots.get(SlotName::MovieDate)) {
        check_date(date, today)?;
    }
    if let Some(count) = slots.get(SlotName::TicketCount) {
        check_ticket_count(count)?;
    }
    if let Some(mobile) = slots.get(SlotName::Mobile) {
        check_mobile(mobile)?;
    }
    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn check_movie(movie: &str, catalog: &Catalog) -> Result<(), Violation> {
    if catalog.has_movie(movie) {
        return Ok(());
    }
    Err(Violation::new(
        SlotName::MovieName,
        format!(
            "Showtime for the {movie} is not available. You can choose from currently available movies."
        ),
    ))
}

fn check_theater(theater: &str, catalog: &Catalog) -> Result<(), Violation> {
    if catalog.has_theater(theater) {
        return Ok(());
    }
    Err(Violation::new(
        SlotName::TheaterName,
        format!(
            "Showtime in theater {theater} is not available. You can choose one from the list above."
        ),
    ))
}

fn check_date(raw: &str, today: NaiveDate) -> Result<(), Violation> {
    let Ok(date) = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) else {
        return Err(Violation::new(
            SlotName::MovieDate,
            "I did not understand date. When would you like to watch your movie?",
        ));
    };

    if date < today {
        return Err(Violation::new(
            SlotName::MovieDate,
            "Booking must be scheduled at least one day in advance. Can you try a different date?",
        ));
    }

    let window_end = today
        .checked_add_days(Days::new(BOOKING_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);
    if date >= window_end {
        return Err(Violation::new(
            SlotName::MovieDate,
            format!(
                "I can book only upto 1 month in advance. Can you try a date between {} and {}?",
                today.format(DATE_FORMAT),
                window_end.format(DATE_FORMAT)
            ),
        ));
    }

    Ok(())
}

fn check_ticket_count(raw: &str) -> Result<(), Violation> {
    let Ok(count) = raw.trim().parse::<i64>() else {
        return Err(Violation::new(
            SlotName::TicketCount,
            "I did not understand how many tickets you want. How many tickets would you like to book?",
        ));
    };

    if count < MIN_TICKETS {
        return Err(Violation::new(
            SlotName::TicketCount,
            "You should book atleast one ticket. How many tickets would you like to book?",
        ));
    }
    if count > MAX_TICKETS {
        return Err(Violation::new(
            SlotName::TicketCount,
            "You can book upto 10 tickets using the chatbot. How many tickets would you like to book?",
        ));
    }
    Ok(())
}

fn check_mobile(mobile: &str) -> Result<(), Violation> {
    if MOBILE_PATTERN.is_match(mobile) {
        return Ok(());
    }
    Err(Violation::new(
        SlotName::Mobile,
        format!("{mobile} is not a valid mobile number. Please provide a valid mobile number?"),
    ))
}
