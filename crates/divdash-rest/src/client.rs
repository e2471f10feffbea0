//! Main analytics client implementation

use crate::endpoints::{BacktestEndpoints, HealthEndpoints};
use crate::error::{RestError, RestResult};
use divdash_types::{AnalysisRequest, PortfolioSnapshot};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Service address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3005";

/// Environment variable overriding the service address
pub const BASE_URL_ENV: &str = "DIVDASH_API_URL";

/// Environment variable overriding the request timeout (seconds)
pub const TIMEOUT_ENV: &str = "DIVDASH_API_TIMEOUT_SECS";

/// Portfolio analytics service client
///
/// # Example
///
/// ```no_run
/// use divdash_rest::AnalyticsClient;
/// use divdash_types::{AnalysisForm, Timeframe};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AnalyticsClient::from_env()?;
///     client.health().await?;
///
///     let request = AnalysisForm::new("AAPL", Timeframe::OneMonth, 5, "2024-01-01", "2024-12-31")
///         .validate()?;
///     let snapshot = client.backtest(&request).await?;
///     println!("Total dividends: {}", snapshot.total_dividend);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AnalyticsClient {
    http_client: Client,
    base_url: String,
}

impl AnalyticsClient {
    /// Create a client for the default local service
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client configured from the environment
    pub fn from_env() -> RestResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("divdash-rest/0.1.0"))
            .build()
            .map_err(|e| RestError::RequestConstruction(e.to_string()))?;

        info!(base_url = %config.base_url, "Created analytics client");

        Ok(Self {
            http_client,
            base_url: config.base_url,
        })
    }

    /// Base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the health endpoint
    pub fn health_endpoint(&self) -> HealthEndpoints<'_> {
        HealthEndpoints::new(&self.http_client, &self.base_url)
    }

    /// Get the backtest endpoint
    pub fn backtest_endpoint(&self) -> BacktestEndpoints<'_> {
        BacktestEndpoints::new(&self.http_client, &self.base_url)
    }

    /// Probe service connectivity
    pub async fn health(&self) -> RestResult<()> {
        self.health_endpoint().check().await
    }

    /// Run a backtest analysis
    pub async fn backtest(&self, request: &AnalysisRequest) -> RestResult<PortfolioSnapshot> {
        self.backtest_endpoint().run(request).await
    }
}

impl std::fmt::Debug for AnalyticsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from `DIVDASH_API_URL` and `DIVDASH_API_TIMEOUT_SECS`
    pub fn from_env() -> RestResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RestResult<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|t| !t.trim().is_empty()) {
            config.timeout_secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    RestError::InvalidConfig(format!(
                        "{} must be a positive number of seconds, got {:?}",
                        TIMEOUT_ENV, raw
                    ))
                })?;
        }

        Ok(config)
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
