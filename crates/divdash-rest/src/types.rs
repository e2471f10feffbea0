//! Types for analytics service requests and responses

use serde::Deserialize;

/// Endpoint paths relative to the service base URL
pub mod paths {
    pub const HEALTH: &str = "/health";
    pub const BACKTEST: &str = "/api/v1/backtest";
}

/// Error body returned with a non-success status
///
/// Servers use either `message` or `error`; both are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extract the server message from a raw error body
    pub fn message_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .message
            .or(parsed.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
