//! Backtest analysis endpoint

use super::{endpoint_url, read_body};
use crate::error::{RestError, RestResult};
use crate::types::paths;
use divdash_types::{AnalysisRequest, PortfolioSnapshot, RawSnapshot};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Backtest endpoint
pub struct BacktestEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> BacktestEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Submit a backtest and normalize the response into a snapshot
    ///
    /// The request is sent as-is; validation is the caller's job. When the
    /// response does not name a ticker, the requested ticker is used.
    #[instrument(
        skip(self, request),
        fields(ticker = %request.ticker, timeframe = %request.timeframe, quantity = request.quantity)
    )]
    pub async fn run(&self, request: &AnalysisRequest) -> RestResult<PortfolioSnapshot> {
        let url = endpoint_url(self.base_url, paths::BACKTEST)?;
        debug!(
            "Submitting backtest {} to {}",
            request.start_date, request.end_date
        );

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| RestError::from_transport(e, self.base_url))?;

        let body = read_body(response, self.base_url).await?;

        let mut raw: RawSnapshot =
            serde_json::from_str(&body).map_err(|e| RestError::Parse(e.to_string()))?;
        if raw.ticker.as_deref().map_or(true, |t| t.trim().is_empty()) {
            raw.ticker = Some(request.ticker.clone());
        }

        let snapshot = PortfolioSnapshot::from_raw(raw);
        info!(
            years = snapshot.schedule.year_entries.len(),
            payments = snapshot.schedule.payment_count(),
            "Backtest completed"
        );

        Ok(snapshot)
    }
}
