//! HTTP surface for the bot platform's code hook

mod handlers;
mod types;

pub use handlers::create_router;

use crate::runtime::ProductionRuntime;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<ProductionRuntime>,
}

impl AppState {
    pub fn new(runtime: ProductionRuntime) -> Self {
        Self {
            runtime: Arc::new(runtime),
        }
    }
}
