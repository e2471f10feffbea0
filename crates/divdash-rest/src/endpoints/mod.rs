//! API endpoint implementations

pub mod backtest;
pub mod health;

pub use backtest::BacktestEndpoints;
pub use health::HealthEndpoints;

use crate::error::{RestError, RestResult};
use crate::types::ErrorBody;
use reqwest::{Response, Url};
use tracing::debug;

/// Join the base URL and an endpoint path, keeping any base path prefix
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> RestResult<Url> {
    let joined = format!("{}{}", base_url.trim_end_matches('/'), path);
    Url::parse(&joined).map_err(|e| RestError::RequestConstruction(format!("{}: {}", joined, e)))
}

/// Read the body of a response, turning non-success statuses into rejections
pub(crate) async fn read_body(response: Response, base_url: &str) -> RestResult<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| RestError::from_transport(e, base_url))?;

    if status.is_success() {
        return Ok(body);
    }

    debug!(status = status.as_u16(), "Service rejected request");
    let message = ErrorBody::message_from(&body)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Unknown error".to_string());

    Err(RestError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_keeps_prefix() {
        let url = endpoint_url("http://localhost:3005/", "/health").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3005/health");

        let url = endpoint_url("https://example.com/analytics", "/api/v1/backtest").unwrap();
        assert_eq!(url.as_str(), "https://example.com/analytics/api/v1/backtest");
    }

    #[test]
    fn test_endpoint_url_rejects_garbage() {
        let err = endpoint_url("not a url", "/health").unwrap_err();
        assert!(matches!(err, RestError::RequestConstruction(_)));
    }
}
