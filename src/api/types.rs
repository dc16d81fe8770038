//! API response types that aren't part of the code-hook protocol

use serde::Serialize;

/// Response for health checks
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Response for the version endpoint
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
