//! HTTP client for the portfolio analytics service
//!
//! The service exposes two endpoints:
//!
//! - `GET /health`: connectivity probe, any success status means available
//! - `POST /api/v1/backtest`: runs a dividend backtest for one ticker
//!
//! Responses are normalized into [`PortfolioSnapshot`](divdash_types::PortfolioSnapshot)
//! at this boundary, so callers never see missing or mistyped fields.
//!
//! # Example
//!
//! ```no_run
//! use divdash_rest::{AnalyticsClient, ClientConfig};
//! use divdash_types::{AnalysisForm, Timeframe};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalyticsClient::with_config(
//!         ClientConfig::new().with_base_url("http://localhost:3005").with_timeout(10),
//!     )?;
//!
//!     let request = AnalysisForm::new("QQCL.TO", Timeframe::OneDay, 1, "2024-05-01", "2025-07-26")
//!         .validate()?;
//!     let snapshot = client.backtest(&request).await?;
//!     println!("{} paid {} in dividends", snapshot.ticker, snapshot.total_dividend);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Failures are classified into [`RestError`]: rejections carry the HTTP
//! status and server message, unreachable services carry the base URL.
//! Nothing is retried automatically.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod service;
pub mod types;

// Re-export main types
pub use client::{AnalyticsClient, ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV};
pub use error::{RestError, RestResult};
pub use service::AnalysisService;
pub use types::{paths, ErrorBody};
