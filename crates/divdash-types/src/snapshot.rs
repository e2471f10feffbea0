//! Portfolio analysis result and its normalization from the wire shape

use crate::enums::{DividendFrequency, PaymentStatus};
use crate::format::parse_date;
use crate::raw::{RawDividendMetrics, RawSnapshot, RawYearEntry};
use crate::schedule::{DividendSchedule, PaymentRecord, YearEntry};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of one analysis run
///
/// Every field is populated; missing wire values have already been replaced
/// by explicit defaults. Deserializing a snapshot goes through [`RawSnapshot`]
/// so a partial response still yields a complete value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSnapshot")]
pub struct PortfolioSnapshot {
    /// Analyzed ticker (may be empty if neither the response nor the caller named one)
    pub ticker: String,
    /// ISO currency code of all monetary values
    pub currency: String,

    pub total_investment: Decimal,
    pub total_value_today: Decimal,
    pub average_cost: Decimal,
    pub total_shares: Decimal,

    /// Capital P&L
    #[serde(rename = "pnL")]
    pub pnl: Decimal,
    #[serde(rename = "pnLPercent")]
    pub pnl_percent: Decimal,
    /// Total return including dividends
    #[serde(rename = "pnLWithDividend")]
    pub pnl_with_dividend: Decimal,
    #[serde(rename = "pnLWithDividendPercent")]
    pub pnl_with_dividend_percent: Decimal,

    pub total_dividend: Decimal,
    pub total_div_percent: Decimal,
    pub last_dividend_yield: Decimal,
    pub ttm_dividend_yield: Decimal,
    pub yield_on_cost: Decimal,

    pub dividend_frequency: DividendFrequency,
    /// Confidence of the frequency detection as a fraction in `0..=1`, if
    /// the service reports one
    pub frequency_confidence: Option<Decimal>,
    /// Why the service chose this frequency
    pub frequency_reason: Option<String>,
    pub dividends_found: u32,

    pub dividend_metrics: DividendMetrics,
    #[serde(rename = "dividendHistory")]
    pub schedule: DividendSchedule,
}

/// Extended dividend metrics
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendMetrics {
    pub dividend_yield: Decimal,
    pub trailing_dividend_yield: Decimal,
    pub forward_dividend_yield: Decimal,
    pub dividend_per_share: Decimal,
    pub dividend_growth_rate: Decimal,
    pub ttm_dividend_sum: Decimal,
    pub annualized_dividend: Decimal,
    pub ex_dividend_date: Option<NaiveDate>,
    pub next_ex_dividend_date: Option<NaiveDate>,
}

/// Yield classification shown in the insights panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldGrade {
    /// Above 3%
    HighYield,
    /// Above 1%
    ModerateYield,
    LowYield,
}

impl YieldGrade {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighYield => "High Yield",
            Self::ModerateYield => "Moderate Yield",
            Self::LowYield => "Low Yield",
        }
    }
}

/// Direction of dividend growth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividendTrend {
    Stable,
    Declining,
}

impl DividendTrend {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Declining => "Declining",
        }
    }
}

impl PortfolioSnapshot {
    /// Normalize a raw response into a fully populated snapshot
    pub fn from_raw(raw: RawSnapshot) -> Self {
        let schedule = normalize_schedule(raw.dividend_history.unwrap_or_default());

        let issues = schedule.validate();
        if !issues.is_empty() {
            warn!(count = issues.len(), "Dividend history violates schedule invariants");
            for issue in &issues {
                debug!("schedule issue: {}", issue);
            }
        }

        let dividends_found = raw
            .summary
            .and_then(|s| s.dividends_found)
            .unwrap_or_else(|| schedule.paid_count() as u32);

        Self {
            ticker: raw.ticker.unwrap_or_default().trim().to_ascii_uppercase(),
            currency: raw
                .currency
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| crate::format::DEFAULT_CURRENCY.to_string()),
            total_investment: raw.total_investment.unwrap_or_default(),
            total_value_today: raw.total_value_today.unwrap_or_default(),
            average_cost: raw.average_cost.unwrap_or_default(),
            total_shares: raw.total_shares.unwrap_or_default(),
            pnl: raw.pnl.unwrap_or_default(),
            pnl_percent: raw.pnl_percent.unwrap_or_default(),
            pnl_with_dividend: raw.pnl_with_dividend.unwrap_or_default(),
            pnl_with_dividend_percent: raw.pnl_with_dividend_percent.unwrap_or_default(),
            total_dividend: raw.total_dividend.unwrap_or_default(),
            total_div_percent: raw.total_div_percent.unwrap_or_default(),
            last_dividend_yield: raw.last_dividend_yield.unwrap_or_default(),
            ttm_dividend_yield: raw.ttm_dividend_yield.unwrap_or_default(),
            yield_on_cost: raw.yield_on_cost.unwrap_or_default(),
            dividend_frequency: raw
                .dividend_frequency
                .map(DividendFrequency::from)
                .unwrap_or_default(),
            frequency_confidence: raw.frequency_confidence,
            frequency_reason: raw.frequency_reason.filter(|r| !r.trim().is_empty()),
            dividends_found,
            dividend_metrics: raw
                .dividend_metrics
                .map(DividendMetrics::from_raw)
                .unwrap_or_default(),
            schedule,
        }
    }

    /// Returns true if the analysis found any dividend income
    pub fn has_dividends(&self) -> bool {
        self.total_dividend > Decimal::ZERO
            || self.schedule.payments().any(|(_, p)| p.has_amount())
    }

    /// Dividends as a percentage of total return; zero unless the return is positive
    pub fn dividend_share_of_return(&self) -> Decimal {
        if self.pnl_with_dividend > Decimal::ZERO {
            self.total_dividend / self.pnl_with_dividend * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }

    /// Classify the dividend yield
    pub fn yield_grade(&self) -> YieldGrade {
        let yield_pct = self.dividend_metrics.dividend_yield;
        if yield_pct > Decimal::from(3) {
            YieldGrade::HighYield
        } else if yield_pct > Decimal::ONE {
            YieldGrade::ModerateYield
        } else {
            YieldGrade::LowYield
        }
    }

    /// Growth direction of the dividend
    pub fn dividend_trend(&self) -> DividendTrend {
        if self.dividend_metrics.dividend_growth_rate >= Decimal::ZERO {
            DividendTrend::Stable
        } else {
            DividendTrend::Declining
        }
    }
}

impl From<RawSnapshot> for PortfolioSnapshot {
    fn from(raw: RawSnapshot) -> Self {
        Self::from_raw(raw)
    }
}

impl DividendMetrics {
    fn from_raw(raw: RawDividendMetrics) -> Self {
        Self {
            dividend_yield: raw.dividend_yield.unwrap_or_default(),
            trailing_dividend_yield: raw.trailing_dividend_yield.unwrap_or_default(),
            forward_dividend_yield: raw.forward_dividend_yield.unwrap_or_default(),
            dividend_per_share: raw.dividend_per_share.unwrap_or_default(),
            dividend_growth_rate: raw.dividend_growth_rate.unwrap_or_default(),
            ttm_dividend_sum: raw.ttm_dividend_sum.unwrap_or_default(),
            annualized_dividend: raw.annualized_dividend.unwrap_or_default(),
            ex_dividend_date: raw.ex_dividend_date.as_deref().and_then(parse_date),
            next_ex_dividend_date: raw.next_ex_dividend_date.as_deref().and_then(parse_date),
        }
    }
}

fn normalize_schedule(raw_years: Vec<RawYearEntry>) -> DividendSchedule {
    let mut entries: Vec<YearEntry> = raw_years
        .into_iter()
        .filter_map(|raw| {
            let Some(year) = raw.year else {
                warn!("Dropping dividend history entry without a year");
                return None;
            };
            let frequency = raw
                .frequency
                .map(DividendFrequency::from)
                .unwrap_or_default();

            let mut payments: Vec<PaymentRecord> = raw
                .payments
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .map(|(idx, p)| {
                    let period = p.period.unwrap_or(idx as u32 + 1);
                    let label = p
                        .label
                        .filter(|l| !l.trim().is_empty())
                        .unwrap_or_else(|| frequency.period_label(period));
                    PaymentRecord {
                        period,
                        amount: p.amount.unwrap_or_default(),
                        status: p
                            .status
                            .map(PaymentStatus::from)
                            .unwrap_or(PaymentStatus::Pending),
                        label,
                    }
                })
                .collect();
            payments.sort_by_key(|p| p.period);

            Some(YearEntry {
                year,
                frequency,
                payments,
            })
        })
        .collect();

    entries.sort_by_key(|e| e.year);
    DividendSchedule::new(entries)
}
