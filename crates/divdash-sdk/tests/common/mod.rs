//! Common test utilities and fixtures for integration tests

use async_trait::async_trait;
use divdash_rest::{AnalysisService, RestError, RestResult};
use divdash_types::{AnalysisRequest, PortfolioSnapshot};
use serde_json::json;
use std::sync::Mutex;
use std::time::Duration;

/// Response body for the two-year monthly history, as the service sends it
pub fn backtest_body(ticker: &str) -> serde_json::Value {
    let y2024: Vec<_> = (1..=12)
        .map(|month| {
            let amount = if month <= 4 { 0.26785714285714285 } else { 0.25 };
            json!({ "period": month, "amount": amount, "status": "paid" })
        })
        .collect();

    let mut y2025: Vec<_> = [0.295, 0.295, 0.295, 0.275, 0.295, 0.295]
        .iter()
        .enumerate()
        .map(|(i, amount)| json!({ "period": i + 1, "amount": amount, "status": "paid" }))
        .collect();
    y2025.push(json!({ "period": 7, "amount": 0.26785714285714285, "status": "upcoming" }));
    for month in 8..=12 {
        y2025.push(json!({ "period": month, "amount": 0, "status": "pending" }));
    }

    json!({
        "ticker": ticker,
        "totalDividend": 64.75,
        "totalInvestment": "1012.40",
        "pnLWithDividend": 120.5,
        "dividendFrequency": "monthly",
        "dividendHistory": [
            { "year": 2025, "frequency": "monthly", "payments": y2025 },
            { "year": 2024, "frequency": "monthly", "payments": y2024 }
        ]
    })
}

/// Parse a response body the way the HTTP client does
pub fn snapshot_from(body: serde_json::Value) -> PortfolioSnapshot {
    serde_json::from_value(body).unwrap()
}

/// Scripted stand-in for the analytics service
pub struct FakeService {
    healthy: bool,
    delay: Duration,
    outcome: fn(&AnalysisRequest) -> RestResult<PortfolioSnapshot>,
    /// Extra latency for one ticker
    slow_ticker: Option<(&'static str, Duration)>,
    pub requests: Mutex<Vec<AnalysisRequest>>,
}

impl FakeService {
    /// Service answering every backtest with [`backtest_body`]
    pub fn healthy() -> Self {
        Self {
            healthy: true,
            delay: Duration::ZERO,
            outcome: |request| Ok(snapshot_from(backtest_body(&request.ticker))),
            slow_ticker: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Service that never answers in time
    pub fn timing_out() -> Self {
        Self {
            healthy: false,
            delay: Duration::from_millis(20),
            outcome: |_| {
                Err(RestError::Unreachable {
                    url: "http://localhost:3005".to_string(),
                    reason: "operation timed out".to_string(),
                })
            },
            slow_ticker: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Service rejecting every backtest
    pub fn rejecting() -> Self {
        Self {
            healthy: true,
            delay: Duration::ZERO,
            outcome: |_| {
                Err(RestError::Rejected {
                    status: 404,
                    message: "Ticker not found".to_string(),
                })
            },
            slow_ticker: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Delay answers for `ticker` so they arrive after later requests
    pub fn with_slow_ticker(mut self, ticker: &'static str, delay: Duration) -> Self {
        self.slow_ticker = Some((ticker, delay));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AnalysisService for FakeService {
    async fn health(&self) -> RestResult<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(RestError::Unreachable {
                url: "http://localhost:3005".to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    async fn backtest(&self, request: &AnalysisRequest) -> RestResult<PortfolioSnapshot> {
        self.requests.lock().unwrap().push(request.clone());
        let delay = match self.slow_ticker {
            Some((ticker, delay)) if request.ticker == ticker => delay,
            _ => self.delay,
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        (self.outcome)(request)
    }
}
