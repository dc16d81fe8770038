//! Runtime for executing dialog turns
//!
//! Routes an inbound event to its intent handler, runs the pure transition,
//! then executes the resulting effects against injected I/O.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::DialogRuntime;
pub use traits::*;

use crate::notify::Notifier;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Type alias for production runtime with concrete implementations
pub type ProductionRuntime = DialogRuntime<Arc<dyn Notifier>, SystemClock>;

/// Intents this bot knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    BookMovie,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::BookMovie => "BookMovie",
        }
    }
}

impl FromStr for Intent {
    type Err = DispatchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "BookMovie" => Ok(Intent::BookMovie),
            other => Err(DispatchError::UnsupportedIntent(other.to_string())),
        }
    }
}

/// Errors that fail a turn outright
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),
}
