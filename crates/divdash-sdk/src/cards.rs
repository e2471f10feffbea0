//! Metric cards and insight rows built from a snapshot
//!
//! Everything here is display-ready text; the view only lays it out.

use chrono::NaiveDate;
use divdash_types::format::{format_currency, format_naive_date, format_number, format_percent};
use divdash_types::{Decimal, PortfolioSnapshot};

/// Direction indicator shown next to a card value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Trend from the sign of a value
    pub fn from_value(value: Decimal) -> Self {
        if value > Decimal::ZERO {
            Self::Up
        } else if value < Decimal::ZERO {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "",
        }
    }
}

/// A titled value with an optional subtitle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub subtitle: Option<String>,
    pub trend: Trend,
    /// Short highlight tag, e.g. "GROWTH"
    pub badge: Option<String>,
}

impl MetricCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            subtitle: None,
            trend: Trend::Flat,
            badge: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = trend;
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// Label/value pair of the insights panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightRow {
    pub label: &'static str,
    pub value: String,
}

impl InsightRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Trailing twelve month dividend summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtmSummary {
    pub ttm_sum: String,
    pub annualized: String,
    /// "Based on monthly frequency"
    pub basis: String,
}

/// Last and estimated next ex-dividend dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDates {
    pub last_ex_dividend: String,
    /// Estimated from the frequency; not announced
    pub next_ex_dividend: Option<String>,
}

/// Investment, Current Value, Capital P&L and Total Return
pub fn summary_cards(snapshot: &PortfolioSnapshot) -> Vec<MetricCard> {
    let money = |v: Decimal| format_currency(v, &snapshot.currency);

    vec![
        MetricCard::new("Investment", money(snapshot.total_investment))
            .with_subtitle(format!("{} shares", snapshot.total_shares.normalize())),
        MetricCard::new("Current Value", money(snapshot.total_value_today))
            .with_subtitle(format!("{} avg", money(snapshot.average_cost)))
            .with_trend(Trend::from_value(snapshot.pnl)),
        MetricCard::new("Capital P&L", money(snapshot.pnl))
            .with_subtitle(format_percent(snapshot.pnl_percent, 2))
            .with_trend(Trend::from_value(snapshot.pnl)),
        MetricCard::new("Total Return", money(snapshot.pnl_with_dividend))
            .with_subtitle(format_percent(snapshot.pnl_with_dividend_percent, 2))
            .with_trend(Trend::from_value(snapshot.pnl_with_dividend)),
    ]
}

/// Total Dividends, the three yields and the detected frequency
pub fn dividend_cards(snapshot: &PortfolioSnapshot) -> Vec<MetricCard> {
    let mut frequency = MetricCard::new("Frequency", snapshot.dividend_frequency.label());
    // Confidence arrives as a fraction in 0..=1
    let confidence = snapshot
        .frequency_confidence
        .map(|c| format!("{} confidence", format_percent(c * Decimal::ONE_HUNDRED, 0)));
    let detail = match (confidence, &snapshot.frequency_reason) {
        (Some(confidence), Some(reason)) => Some(format!("{}, {}", confidence, reason)),
        (Some(confidence), None) => Some(confidence),
        (None, Some(reason)) => Some(reason.clone()),
        (None, None) => None,
    };
    if let Some(detail) = detail {
        frequency = frequency.with_subtitle(detail);
    }

    vec![
        MetricCard::new(
            "Total Dividends",
            format_currency(snapshot.total_dividend, &snapshot.currency),
        )
        .with_subtitle(format!(
            "{} of investment",
            format_percent(snapshot.total_div_percent, 2)
        )),
        MetricCard::new("Last Yield", format_percent(snapshot.last_dividend_yield, 2))
            .with_subtitle("Annualized last payment"),
        MetricCard::new("TTM Yield", format_percent(snapshot.ttm_dividend_yield, 2))
            .with_subtitle("Trailing twelve months"),
        MetricCard::new("Yield on Cost", format_percent(snapshot.yield_on_cost, 2))
            .with_subtitle("On average cost"),
        frequency,
    ]
}

/// Cards for the extended dividend metrics block
pub fn dividend_metric_cards(snapshot: &PortfolioSnapshot) -> Vec<MetricCard> {
    let metrics = &snapshot.dividend_metrics;

    let mut growth = MetricCard::new(
        "Dividend Growth Rate",
        format_percent(metrics.dividend_growth_rate, 2),
    )
    .with_subtitle("Year-over-year growth")
    .with_trend(Trend::from_value(metrics.dividend_growth_rate));
    if metrics.dividend_growth_rate > Decimal::ZERO {
        growth = growth.with_badge("GROWTH");
    }

    vec![
        MetricCard::new("Dividend Yield", format_percent(metrics.dividend_yield, 2))
            .with_subtitle("Current annualized yield"),
        MetricCard::new(
            "Trailing Dividend Yield",
            format_percent(metrics.trailing_dividend_yield, 2),
        )
        .with_subtitle("TTM actual yield"),
        MetricCard::new(
            "Forward Dividend Yield",
            format_percent(metrics.forward_dividend_yield, 2),
        )
        .with_subtitle("Projected annual yield"),
        MetricCard::new(
            "Dividend Per Share",
            format_currency(metrics.dividend_per_share, &snapshot.currency),
        )
        .with_subtitle("Last dividend payment"),
        growth,
    ]
}

/// Capital Growth, Dividend Return and Total Return percentages
pub fn performance_overview(snapshot: &PortfolioSnapshot) -> Vec<InsightRow> {
    vec![
        InsightRow::new("Capital Growth", format_percent(snapshot.pnl_percent, 2)),
        InsightRow::new("Dividend Return", format_percent(snapshot.total_div_percent, 2)),
        InsightRow::new(
            "Total Return",
            format_percent(snapshot.pnl_with_dividend_percent, 2),
        ),
    ]
}

/// Rows of the dividend insights panel
pub fn insight_rows(snapshot: &PortfolioSnapshot) -> Vec<InsightRow> {
    vec![
        InsightRow::new("Payment Frequency", snapshot.dividend_frequency.label()),
        InsightRow::new("Payments Found", snapshot.dividends_found.to_string()),
        InsightRow::new(
            "Dividend % of Total Return",
            format_percent(snapshot.dividend_share_of_return(), 2),
        ),
        InsightRow::new(
            "Yield Grade",
            format!(
                "{} ({})",
                snapshot.yield_grade().label(),
                format_percent(snapshot.dividend_metrics.dividend_yield, 2)
            ),
        ),
        InsightRow::new("Trend", snapshot.dividend_trend().label()),
    ]
}

/// TTM summary, only when dividends were received in the last twelve months
pub fn ttm_summary(snapshot: &PortfolioSnapshot) -> Option<TtmSummary> {
    let metrics = &snapshot.dividend_metrics;
    if metrics.ttm_dividend_sum <= Decimal::ZERO {
        return None;
    }

    Some(TtmSummary {
        ttm_sum: format_currency(metrics.ttm_dividend_sum, &snapshot.currency),
        annualized: format_currency(metrics.annualized_dividend, &snapshot.currency),
        basis: format!(
            "Based on {} frequency",
            snapshot.dividend_frequency.label().to_lowercase()
        ),
    })
}

/// Ex-dividend dates, when the last one is known
pub fn key_dates(snapshot: &PortfolioSnapshot) -> Option<KeyDates> {
    let metrics = &snapshot.dividend_metrics;
    let last = metrics.ex_dividend_date?;

    Some(KeyDates {
        last_ex_dividend: format_naive_date(last),
        next_ex_dividend: metrics.next_ex_dividend_date.map(format_naive_date),
    })
}

/// Compact one-line position summary: `"18 shares @ $22.58"`
pub fn position_line(snapshot: &PortfolioSnapshot) -> String {
    format!(
        "{} shares @ {}",
        format_number(snapshot.total_shares, 0),
        format_currency(snapshot.average_cost, &snapshot.currency)
    )
}

/// Format an analysis window: `"May 1, 2024 to Jul 26, 2025"`
pub fn period_line(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} to {}", format_naive_date(start), format_naive_date(end))
}
