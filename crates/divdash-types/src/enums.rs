//! Dividend frequency, payment status and timeframe enums
//!
//! Frequency and status values arrive as free-form strings from the analytics
//! service. Unknown values are kept verbatim in an `Other` variant so every
//! mapping below stays total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often an instrument distributes dividends
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DividendFrequency {
    /// Twelve payments per year
    Monthly,
    /// Four payments per year
    Quarterly,
    /// Two payments per year
    HalfYearly,
    /// One payment per year
    Annually,
    /// Unrecognized value, carried through unchanged
    Other(String),
}

impl DividendFrequency {
    /// Returns the wire name of this frequency
    pub fn as_str(&self) -> &str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::HalfYearly => "half-yearly",
            Self::Annually => "annually",
            Self::Other(raw) => raw,
        }
    }

    /// Display label; unknown values pass through unchanged
    pub fn label(&self) -> &str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::HalfYearly => "Semi-Annual",
            Self::Annually => "Annual",
            Self::Other(raw) => raw,
        }
    }

    /// Indicator size tier. Lower-frequency schedules get fewer, larger dots.
    pub fn dot_size(&self) -> DotSize {
        match self {
            Self::Monthly => DotSize::Small,
            Self::Quarterly => DotSize::Medium,
            Self::HalfYearly => DotSize::Large,
            Self::Annually => DotSize::ExtraLarge,
            Self::Other(_) => DotSize::Small,
        }
    }

    /// Number of periods in a year, if the frequency is known
    pub fn expected_periods(&self) -> Option<u32> {
        match self {
            Self::Monthly => Some(12),
            Self::Quarterly => Some(4),
            Self::HalfYearly => Some(2),
            Self::Annually => Some(1),
            Self::Other(_) => None,
        }
    }

    /// Returns true if `period` is a valid 1-indexed period for this frequency
    ///
    /// Unknown frequencies accept any positive period.
    pub fn contains_period(&self, period: u32) -> bool {
        match self.expected_periods() {
            Some(max) => (1..=max).contains(&period),
            None => period >= 1,
        }
    }

    /// Short display label for a period ("Jan", "Q1", "H2", "FY")
    pub fn period_label(&self, period: u32) -> String {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];

        if !self.contains_period(period) {
            return format!("P{}", period);
        }

        match self {
            Self::Monthly => MONTHS[(period - 1) as usize].to_string(),
            Self::Quarterly => format!("Q{}", period),
            Self::HalfYearly => format!("H{}", period),
            Self::Annually => "FY".to_string(),
            Self::Other(_) => format!("P{}", period),
        }
    }

    /// Returns true if the value was not recognized
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl Default for DividendFrequency {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for DividendFrequency {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "monthly" => Self::Monthly,
            "quarterly" => Self::Quarterly,
            "half-yearly" | "semi-annual" | "semi-annually" => Self::HalfYearly,
            "annually" | "annual" | "yearly" => Self::Annually,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for DividendFrequency {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<DividendFrequency> for String {
    fn from(freq: DividendFrequency) -> Self {
        match freq {
            DividendFrequency::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DividendFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settlement state of a single dividend payment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    /// Verified historical payment
    Paid,
    /// Projected payment; the amount is an estimate
    Upcoming,
    /// Not yet announced
    Pending,
    /// Position was not held on the ex-dividend date
    NotEligible,
    /// Unrecognized value, carried through unchanged
    Other(String),
}

impl PaymentStatus {
    /// Returns the wire name of this status
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paid => "paid",
            Self::Upcoming => "upcoming",
            Self::Pending => "pending",
            Self::NotEligible => "not_eligible",
            Self::Other(raw) => raw,
        }
    }

    /// Indicator color for this status
    pub fn color(&self) -> StatusColor {
        match self {
            Self::Paid => StatusColor::Green,
            Self::Upcoming => StatusColor::Yellow,
            Self::Pending | Self::NotEligible | Self::Other(_) => StatusColor::Gray,
        }
    }

    /// Returns true if no cash can have been received for this status
    pub fn is_cashless(&self) -> bool {
        matches!(self, Self::Pending | Self::NotEligible)
    }

    /// Legend shown above the payment timeline
    pub fn legend() -> [(&'static str, StatusColor); 3] {
        [
            ("Paid", StatusColor::Green),
            ("Upcoming", StatusColor::Yellow),
            ("Pending", StatusColor::Gray),
        ]
    }
}

impl From<String> for PaymentStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "paid" => Self::Paid,
            "upcoming" => Self::Upcoming,
            "pending" => Self::Pending,
            "not_eligible" | "not-eligible" => Self::NotEligible,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic indicator color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    /// Affirmative
    Green,
    /// Caution
    Yellow,
    /// Neutral
    Gray,
}

/// Indicator size tier, ordered smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DotSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl DotSize {
    /// Width of the indicator in terminal cells
    pub fn cells(&self) -> u16 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
            Self::ExtraLarge => 4,
        }
    }
}

/// Candle granularity used by the backtest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    #[default]
    OneDay,
    #[serde(rename = "5D")]
    FiveDays,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "2Y")]
    TwoYears,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "YTD")]
    YearToDate,
    #[serde(rename = "MAX")]
    Max,
}

impl Timeframe {
    /// All supported timeframes in display order
    pub fn all() -> &'static [Timeframe] {
        &[
            Self::OneDay,
            Self::FiveDays,
            Self::OneMonth,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::OneYear,
            Self::TwoYears,
            Self::FiveYears,
            Self::YearToDate,
            Self::Max,
        ]
    }

    /// Returns the timeframe as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::FiveDays => "5D",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::TwoYears => "2Y",
            Self::FiveYears => "5Y",
            Self::YearToDate => "YTD",
            Self::Max => "MAX",
        }
    }

    /// Next timeframe in display order, wrapping around
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous timeframe in display order, wrapping around
    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| TimeframeParseError(s.to_string()))
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a timeframe
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported timeframe: {0} (supported: 1D, 5D, 1M, 3M, 6M, 1Y, 2Y, 5Y, YTD, MAX)")]
pub struct TimeframeParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_labels() {
        assert_eq!(DividendFrequency::Monthly.label(), "Monthly");
        assert_eq!(DividendFrequency::Quarterly.label(), "Quarterly");
        assert_eq!(DividendFrequency::HalfYearly.label(), "Semi-Annual");
        assert_eq!(DividendFrequency::Annually.label(), "Annual");
        assert_eq!(DividendFrequency::from("weekly").label(), "weekly");
    }

    #[test]
    fn test_frequency_dot_sizes_ordered() {
        let sizes: Vec<DotSize> = ["monthly", "quarterly", "half-yearly", "annually"]
            .iter()
            .map(|f| DividendFrequency::from(*f).dot_size())
            .collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(DividendFrequency::from("sporadic").dot_size(), DotSize::Small);
    }

    #[test]
    fn test_frequency_serde_passthrough() {
        let parsed: DividendFrequency = serde_json::from_str("\"half-yearly\"").unwrap();
        assert_eq!(parsed, DividendFrequency::HalfYearly);

        let unknown: DividendFrequency = serde_json::from_str("\"irregular\"").unwrap();
        assert_eq!(unknown, DividendFrequency::Other("irregular".into()));
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"irregular\"");
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(DividendFrequency::Monthly.period_label(7), "Jul");
        assert_eq!(DividendFrequency::Quarterly.period_label(3), "Q3");
        assert_eq!(DividendFrequency::HalfYearly.period_label(2), "H2");
        assert_eq!(DividendFrequency::Annually.period_label(1), "FY");
        assert_eq!(DividendFrequency::Quarterly.period_label(5), "P5");
    }

    #[test]
    fn test_status_colors_total() {
        assert_eq!(PaymentStatus::Paid.color(), StatusColor::Green);
        assert_eq!(PaymentStatus::Upcoming.color(), StatusColor::Yellow);
        assert_eq!(PaymentStatus::Pending.color(), StatusColor::Gray);
        assert_eq!(PaymentStatus::NotEligible.color(), StatusColor::Gray);
        assert_eq!(PaymentStatus::from("cancelled").color(), StatusColor::Gray);
    }

    #[test]
    fn test_status_serde() {
        let parsed: PaymentStatus = serde_json::from_str("\"not_eligible\"").unwrap();
        assert_eq!(parsed, PaymentStatus::NotEligible);
        assert_eq!(serde_json::to_string(&PaymentStatus::Paid).unwrap(), "\"paid\"");
    }

    #[test]
    fn test_timeframe_parse() {
        assert_eq!("1m".parse::<Timeframe>().unwrap(), Timeframe::OneMonth);
        assert_eq!("YTD".parse::<Timeframe>().unwrap(), Timeframe::YearToDate);
        assert!("2W".parse::<Timeframe>().is_err());
        assert_eq!(serde_json::to_string(&Timeframe::Max).unwrap(), "\"MAX\"");
    }

    #[test]
    fn test_timeframe_cycle() {
        assert_eq!(Timeframe::Max.next(), Timeframe::OneDay);
        assert_eq!(Timeframe::OneDay.prev(), Timeframe::Max);
    }
}
