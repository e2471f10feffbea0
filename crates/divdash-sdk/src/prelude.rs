//! Re-exports for convenience
//!
//! Import everything you need with:
//! ```
//! use divdash_sdk::prelude::*;
//! ```

// State
pub use crate::controller::{
    ConnectionStatus, ControllerConfig, ControllerState, PortfolioController, RequestTicket,
    Resolution, Supersede,
};

// Rendering
pub use crate::cards::{
    dividend_cards, dividend_metric_cards, insight_rows, key_dates, performance_overview,
    summary_cards, ttm_summary, InsightRow, KeyDates, MetricCard, Trend, TtmSummary,
};
pub use crate::sample::{default_form, sample_snapshot};
pub use crate::timeline::{render_timeline, AsOf, PaymentDot, Timeline, TimelineRow, TimelineView};

// Service
pub use divdash_rest::{AnalysisService, AnalyticsClient, ClientConfig, RestError, RestResult};

// Types from divdash-types
pub use divdash_types::format::{format_currency, format_percent, format_usd, parse_date};
pub use divdash_types::{
    AnalysisForm, AnalysisRequest, DividendFrequency, DividendSchedule, DotSize, FormField,
    PaymentRecord, PaymentStatus, PortfolioSnapshot, StatusColor, Timeframe, ValidationError,
    YearEntry,
};

// Decimal for amounts
pub use rust_decimal::Decimal;
