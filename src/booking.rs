//! Movie booking domain rules
//!
//! The catalog of bookable movies and theaters, the slot validator, and the
//! reservation snapshot carried in session attributes.

mod catalog;
mod reservation;
mod validation;

pub use catalog::Catalog;
#[cfg(test)]
pub use catalog::{DEFAULT_MOVIES, DEFAULT_THEATERS};
pub use reservation::{
    Reservation, ReservationType, CURRENT_RESERVATION_KEY, LAST_CONFIRMED_RESERVATION_KEY,
};
pub use validation::{validate, ValidationResult};
