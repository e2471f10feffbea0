//! Service seam between the dashboard and the analytics backend

use crate::client::AnalyticsClient;
use crate::error::RestResult;
use async_trait::async_trait;
use divdash_types::{AnalysisRequest, PortfolioSnapshot};

/// Anything that can run a portfolio analysis
///
/// Implemented by [`AnalyticsClient`]; tests supply their own fakes.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Probe connectivity
    async fn health(&self) -> RestResult<()>;

    /// Run a backtest for a validated request
    async fn backtest(&self, request: &AnalysisRequest) -> RestResult<PortfolioSnapshot>;
}

#[async_trait]
impl AnalysisService for AnalyticsClient {
    async fn health(&self) -> RestResult<()> {
        AnalyticsClient::health(self).await
    }

    async fn backtest(&self, request: &AnalysisRequest) -> RestResult<PortfolioSnapshot> {
        AnalyticsClient::backtest(self, request).await
    }
}

#[async_trait]
impl<T: AnalysisService + ?Sized> AnalysisService for std::sync::Arc<T> {
    async fn health(&self) -> RestResult<()> {
        (**self).health().await
    }

    async fn backtest(&self, request: &AnalysisRequest) -> RestResult<PortfolioSnapshot> {
        (**self).backtest(request).await
    }
}
