//! Showtime - movie ticket booking code hook
//!
//! Validates slot values for the `BookMovie` intent, steers the bot
//! platform's dialog, and texts a confirmation once the user says yes.

mod api;
mod booking;
mod config;
mod lex;
mod notify;
mod runtime;
mod state_machine;

use api::{create_router, AppState};
use config::Config;
use runtime::{DialogRuntime, SystemClock};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showtime=info,tower_http=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = Config::from_env();

    if config.sns.is_none() {
        tracing::warn!(
            "No SNS credentials configured. Set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY."
        );
    }
    tracing::info!(
        movies = ?config.catalog.movies(),
        theaters = ?config.catalog.theaters(),
        timezone = %config.timezone,
        "Booking catalog loaded"
    );

    let notifier = notify::from_config(config.sns);
    let runtime = DialogRuntime::new(
        config.catalog,
        notifier,
        SystemClock::new(config.timezone),
    );

    let app = create_router(AppState::new(runtime)).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Showtime code hook listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
