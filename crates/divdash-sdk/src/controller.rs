//! Portfolio state controller
//!
//! Owns the single piece of mutable dashboard state: what is being analyzed,
//! what came back, and what should be on screen. The controller is a plain
//! value owned by the UI loop; network work happens elsewhere and is fed back
//! through [`PortfolioController::resolve`].
//!
//! # State machine
//!
//! ```text
//! Idle ──begin──▶ Loading ──resolve(Ok)──▶ Ready
//!   ▲                │ ▲                     │
//!   │                │ └───────begin─────────┤
//!   │                └──resolve(Err)──▶ Failed
//!   └──────────────────reset────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use divdash_rest::AnalyticsClient;
//! use divdash_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalyticsClient::from_env()?;
//!     let mut controller = PortfolioController::default();
//!
//!     controller.probe(&client).await;
//!     controller.analyze(&client, &default_form()).await?;
//!
//!     if let Some(message) = controller.error_message() {
//!         eprintln!("{} (showing sample data)", message);
//!     }
//!     println!("{}", controller.displayed().ticker);
//!     Ok(())
//! }
//! ```

use crate::sample::sample_snapshot;
use crate::timeline::{AsOf, Timeline};
use divdash_rest::{AnalysisService, RestError, RestResult};
use divdash_types::{AnalysisForm, AnalysisRequest, PortfolioSnapshot, ValidationError};
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

/// Which response wins when requests overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Supersede {
    /// Every response is applied; the one arriving last wins
    #[default]
    LastArrival,
    /// Only the response to the most recently issued request is applied
    LatestIssued,
}

/// Controller configuration
///
/// ```
/// use divdash_sdk::controller::{ControllerConfig, Supersede};
/// use divdash_sdk::timeline::AsOf;
///
/// let config = ControllerConfig::builder()
///     .supersede(Supersede::LatestIssued)
///     .as_of(AsOf::new(2025, 7))
///     .build();
/// assert_eq!(config.supersede, Supersede::LatestIssued);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct ControllerConfig {
    #[builder(default)]
    pub supersede: Supersede,
    /// Period highlighted on the timeline
    #[builder(default, setter(strip_option))]
    pub as_of: Option<AsOf>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Result of the last connectivity probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "Checking",
            Self::Connected => "Connected",
            Self::Disconnected => "Offline",
        }
    }
}

/// Handle for one in-flight analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    /// Monotonic request number, starting at 1
    pub seq: u64,
    pub request: AnalysisRequest,
}

/// Controller state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// Nothing analyzed yet, or reset
    #[default]
    Idle,
    /// Waiting for the response to `ticket`
    Loading { ticket: RequestTicket },
    /// Last applied analysis succeeded
    Ready(PortfolioSnapshot),
    /// Last applied analysis failed; `fallback` is shown instead
    Failed {
        error: String,
        fallback: PortfolioSnapshot,
    },
}

impl ControllerState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading { .. } => "loading",
            Self::Ready(_) => "ready",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Outcome of feeding a response back into the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was issued; the response was dropped
    Discarded,
}

/// Dashboard state owner
#[derive(Debug)]
pub struct PortfolioController {
    config: ControllerConfig,
    state: ControllerState,
    issued: u64,
    /// Ticket whose response may still be applied under `LatestIssued`
    latest: Option<u64>,
    validation_error: Option<ValidationError>,
    connection: ConnectionStatus,
    sample: PortfolioSnapshot,
}

impl Default for PortfolioController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl PortfolioController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: ControllerState::Idle,
            issued: 0,
            latest: None,
            validation_error: None,
            connection: ConnectionStatus::Unknown,
            sample: sample_snapshot(),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Validate the form and start a request
    ///
    /// On a validation error the state is left untouched and the error is
    /// kept for inline display until the next successful `begin` or `reset`.
    pub fn begin(&mut self, form: &AnalysisForm) -> Result<RequestTicket, ValidationError> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "Rejected analysis form");
                self.validation_error = Some(err.clone());
                return Err(err);
            }
        };

        self.issued += 1;
        let ticket = RequestTicket {
            seq: self.issued,
            request,
        };
        info!(seq = ticket.seq, ticker = %ticket.request.ticker, "Analysis started");

        self.validation_error = None;
        self.latest = Some(ticket.seq);
        self.state = ControllerState::Loading {
            ticket: ticket.clone(),
        };
        Ok(ticket)
    }

    /// Apply the outcome of a request
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<PortfolioSnapshot, RestError>,
    ) -> Resolution {
        if self.config.supersede == Supersede::LatestIssued && self.latest != Some(ticket.seq) {
            debug!(seq = ticket.seq, latest = ?self.latest, "Discarding superseded response");
            return Resolution::Discarded;
        }

        self.state = match result {
            Ok(snapshot) => {
                info!(
                    seq = ticket.seq,
                    ticker = %snapshot.ticker,
                    years = snapshot.schedule.year_entries.len(),
                    "Analysis ready"
                );
                ControllerState::Ready(snapshot)
            }
            Err(err) => {
                warn!(seq = ticket.seq, error = %err, "Analysis failed, showing sample data");
                ControllerState::Failed {
                    error: err.to_string(),
                    fallback: self.sample.clone(),
                }
            }
        };
        Resolution::Applied
    }

    /// Back to idle: no snapshot, no error
    ///
    /// Under `LatestIssued` any outstanding request is abandoned as well.
    pub fn reset(&mut self) {
        debug!(from = self.state.name(), "Reset");
        self.state = ControllerState::Idle;
        self.validation_error = None;
        self.latest = None;
    }

    /// Snapshot the view should render
    pub fn displayed(&self) -> &PortfolioSnapshot {
        match &self.state {
            ControllerState::Ready(snapshot) => snapshot,
            ControllerState::Failed { fallback, .. } => fallback,
            ControllerState::Idle | ControllerState::Loading { .. } => &self.sample,
        }
    }

    /// Returns true if the bundled sample is on screen
    pub fn is_showing_sample(&self) -> bool {
        !matches!(self.state, ControllerState::Ready(_))
    }

    /// Timeline of the displayed snapshot
    pub fn timeline(&self) -> Timeline {
        Timeline::for_snapshot(self.displayed(), self.config.as_of)
    }

    /// User-facing message of the last failed analysis
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ControllerState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ControllerState::Loading { .. })
    }

    /// Ticker being or last successfully analyzed
    pub fn analyzed_ticker(&self) -> Option<&str> {
        match &self.state {
            ControllerState::Loading { ticket } => Some(&ticket.request.ticker),
            ControllerState::Ready(snapshot) => Some(&snapshot.ticker),
            ControllerState::Idle | ControllerState::Failed { .. } => None,
        }
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.connection
    }

    /// Record the outcome of a health check
    pub fn record_probe(&mut self, result: RestResult<()>) -> ConnectionStatus {
        self.connection = match result {
            Ok(()) => ConnectionStatus::Connected,
            Err(err) => {
                warn!(error = %err, "Analytics service unavailable");
                ConnectionStatus::Disconnected
            }
        };
        self.connection
    }

    /// Check connectivity and remember the result
    pub async fn probe<S>(&mut self, service: &S) -> ConnectionStatus
    where
        S: AnalysisService + ?Sized,
    {
        let result = service.health().await;
        self.record_probe(result)
    }

    /// Validate, run and apply one analysis
    pub async fn analyze<S>(
        &mut self,
        service: &S,
        form: &AnalysisForm,
    ) -> Result<Resolution, ValidationError>
    where
        S: AnalysisService + ?Sized,
    {
        let ticket = self.begin(form)?;
        let result = service.backtest(&ticket.request).await;
        Ok(self.resolve(ticket, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::default_form;
    use divdash_types::FormField;

    fn snapshot_for(ticker: &str) -> PortfolioSnapshot {
        let mut snapshot = sample_snapshot();
        snapshot.ticker = ticker.to_string();
        snapshot
    }

    fn unreachable() -> RestError {
        RestError::Unreachable {
            url: "http://localhost:3005".into(),
            reason: "timed out".into(),
        }
    }

    #[test]
    fn test_starts_idle_with_sample() {
        let controller = PortfolioController::default();
        assert_eq!(controller.state(), &ControllerState::Idle);
        assert_eq!(controller.displayed(), &sample_snapshot());
        assert!(controller.is_showing_sample());
        assert!(controller.error_message().is_none());
        assert_eq!(controller.connection_status(), ConnectionStatus::Unknown);
    }

    #[test]
    fn test_validation_error_keeps_state() {
        let mut controller = PortfolioController::default();
        let ticket = controller.begin(&default_form()).unwrap();
        controller.resolve(ticket, Ok(snapshot_for("QQCL.TO")));

        let mut form = default_form();
        form.ticker.clear();
        let err = controller.begin(&form).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(FormField::Ticker));
        assert_eq!(controller.validation_error(), Some(&err));
        assert!(matches!(controller.state(), ControllerState::Ready(_)));

        controller.begin(&default_form()).unwrap();
        assert!(controller.validation_error().is_none());
    }

    #[test]
    fn test_loading_then_ready() {
        let mut controller = PortfolioController::default();
        let ticket = controller.begin(&default_form()).unwrap();
        assert_eq!(ticket.seq, 1);
        assert!(controller.is_loading());
        assert_eq!(controller.analyzed_ticker(), Some("QQCL.TO"));

        let result = controller.resolve(ticket, Ok(snapshot_for("QQCL.TO")));
        assert_eq!(result, Resolution::Applied);
        assert!(!controller.is_loading());
        assert!(!controller.is_showing_sample());
    }

    #[test]
    fn test_failure_falls_back_to_sample() {
        let mut controller = PortfolioController::default();
        let ticket = controller.begin(&default_form()).unwrap();
        controller.resolve(ticket, Err(unreachable()));

        let message = controller.error_message().unwrap();
        assert!(message.starts_with("No response from server"));
        assert_eq!(controller.displayed(), &sample_snapshot());
        assert!(controller.analyzed_ticker().is_none());
    }

    #[test]
    fn test_new_request_clears_failure() {
        let mut controller = PortfolioController::default();
        let ticket = controller.begin(&default_form()).unwrap();
        controller.resolve(ticket, Err(unreachable()));

        controller.begin(&default_form()).unwrap();
        assert!(controller.is_loading());
        assert!(controller.error_message().is_none());
    }

    #[test]
    fn test_reset() {
        let mut controller = PortfolioController::default();
        let ticket = controller.begin(&default_form()).unwrap();
        controller.resolve(ticket, Err(unreachable()));
        controller.reset();
        assert_eq!(controller.state(), &ControllerState::Idle);
        assert!(controller.error_message().is_none());
        assert!(controller.validation_error().is_none());
    }

    #[test]
    fn test_last_arrival_accepts_stale_response() {
        let mut controller = PortfolioController::default();
        let mut form = default_form();
        form.ticker = "AAPL".into();
        let first = controller.begin(&form).unwrap();
        form.ticker = "MSFT".into();
        let second = controller.begin(&form).unwrap();
        assert!(second.seq > first.seq);

        controller.resolve(second, Ok(snapshot_for("MSFT")));
        let result = controller.resolve(first, Ok(snapshot_for("AAPL")));
        assert_eq!(result, Resolution::Applied);
        assert_eq!(controller.displayed().ticker, "AAPL");
    }

    #[test]
    fn test_latest_issued_discards_stale_response() {
        let config = ControllerConfig::builder()
            .supersede(Supersede::LatestIssued)
            .build();
        let mut controller = PortfolioController::new(config);
        let mut form = default_form();
        form.ticker = "AAPL".into();
        let first = controller.begin(&form).unwrap();
        form.ticker = "MSFT".into();
        let second = controller.begin(&form).unwrap();

        controller.resolve(second, Ok(snapshot_for("MSFT")));
        let result = controller.resolve(first, Ok(snapshot_for("AAPL")));
        assert_eq!(result, Resolution::Discarded);
        assert_eq!(controller.displayed().ticker, "MSFT");
    }

    #[test]
    fn test_latest_issued_ignores_responses_after_reset() {
        let config = ControllerConfig::builder()
            .supersede(Supersede::LatestIssued)
            .build();
        let mut controller = PortfolioController::new(config);
        let ticket = controller.begin(&default_form()).unwrap();
        controller.reset();
        assert_eq!(
            controller.resolve(ticket, Ok(snapshot_for("QQCL.TO"))),
            Resolution::Discarded
        );
        assert_eq!(controller.state(), &ControllerState::Idle);
    }

    #[test]
    fn test_record_probe() {
        let mut controller = PortfolioController::default();
        assert_eq!(controller.record_probe(Ok(())), ConnectionStatus::Connected);
        assert_eq!(
            controller.record_probe(Err(unreachable())),
            ConnectionStatus::Disconnected
        );
        assert_eq!(controller.connection_status().label(), "Offline");
    }

    #[test]
    fn test_timeline_uses_configured_as_of() {
        let config = ControllerConfig::builder().as_of(AsOf::new(2025, 7)).build();
        let controller = PortfolioController::new(config);
        let timeline = controller.timeline();
        let current = timeline.view().unwrap().current().unwrap();
        assert_eq!(current.label, "Jul");
    }
}
