//! Wire shape of an analysis response
//!
//! Every field is optional and numbers may arrive as JSON numbers, strings or
//! `null`. These types only exist to be normalized into
//! [`PortfolioSnapshot`](crate::PortfolioSnapshot).

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Analysis response exactly as the service sends it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSnapshot {
    pub ticker: Option<String>,
    pub currency: Option<String>,

    #[serde(rename = "pnL", deserialize_with = "lenient_decimal")]
    pub pnl: Option<Decimal>,
    #[serde(rename = "pnLPercent", deserialize_with = "lenient_decimal")]
    pub pnl_percent: Option<Decimal>,
    #[serde(rename = "pnLWithDividend", deserialize_with = "lenient_decimal")]
    pub pnl_with_dividend: Option<Decimal>,
    #[serde(rename = "pnLWithDividendPercent", deserialize_with = "lenient_decimal")]
    pub pnl_with_dividend_percent: Option<Decimal>,

    #[serde(deserialize_with = "lenient_decimal")]
    pub total_dividend: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub total_div_percent: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub last_dividend_yield: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub ttm_dividend_yield: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub yield_on_cost: Option<Decimal>,

    pub dividend_frequency: Option<String>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub frequency_confidence: Option<Decimal>,
    pub frequency_reason: Option<String>,

    #[serde(deserialize_with = "lenient_decimal")]
    pub total_shares: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub total_investment: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub total_value_today: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub average_cost: Option<Decimal>,

    pub dividend_metrics: Option<RawDividendMetrics>,
    pub summary: Option<RawSummary>,
    pub dividend_history: Option<Vec<RawYearEntry>>,
}

/// Extended dividend metrics block
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDividendMetrics {
    #[serde(deserialize_with = "lenient_decimal")]
    pub dividend_yield: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub trailing_dividend_yield: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub forward_dividend_yield: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub dividend_per_share: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub dividend_growth_rate: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub ttm_dividend_sum: Option<Decimal>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub annualized_dividend: Option<Decimal>,
    pub ex_dividend_date: Option<String>,
    pub next_ex_dividend_date: Option<String>,
}

/// Summary counters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSummary {
    #[serde(deserialize_with = "lenient_integer")]
    pub dividends_found: Option<u32>,
}

/// One year of the dividend history
///
/// A server-supplied `totalAmount` is deliberately not captured.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawYearEntry {
    #[serde(deserialize_with = "lenient_integer")]
    pub year: Option<i32>,
    pub frequency: Option<String>,
    pub payments: Option<Vec<RawPayment>>,
}

/// One payment of the dividend history
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPayment {
    #[serde(deserialize_with = "lenient_integer")]
    pub period: Option<u32>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
    pub status: Option<String>,
    pub label: Option<String>,
}

/// Deserialize a decimal from a JSON number or string, mapping `null` and
/// unparsable values to `None`
///
/// Numbers go through their textual form so values like `0.26785714285714285`
/// keep their precision; scientific notation falls back to `f64`.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.and_then(StringOrNumber::into_decimal))
}

/// Deserialize a whole number the same way as [`lenient_decimal`]
///
/// Fractions, negative values for unsigned targets and anything out of
/// range become `None`.
fn lenient_integer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    use rust_decimal::prelude::ToPrimitive;

    let value = lenient_decimal(deserializer)?
        .filter(|d| d.fract().is_zero())
        .and_then(|d| d.to_i64())
        .and_then(|n| T::try_from(n).ok());

    Ok(value)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl StringOrNumber {
    fn into_decimal(self) -> Option<Decimal> {
        use rust_decimal::prelude::FromPrimitive;
        use std::str::FromStr;

        match self {
            Self::String(s) => Decimal::from_str(s.trim()).ok(),
            Self::Number(n) => {
                let s = n.to_string();
                if s.contains('e') || s.contains('E') {
                    n.as_f64().and_then(Decimal::from_f64)
                } else {
                    Decimal::from_str(&s).ok()
                }
            }
            Self::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_keep_precision() {
        let raw: RawPayment =
            serde_json::from_str(r#"{"period": 1, "amount": 0.26785714285714285}"#).unwrap();
        assert_eq!(raw.amount.unwrap().to_string(), "0.26785714285714285");
    }

    #[test]
    fn test_strings_null_and_garbage() {
        let raw: RawSnapshot = serde_json::from_str(
            r#"{"pnL": "11.11", "pnLPercent": null, "totalDividend": "n/a", "averageCost": true}"#,
        )
        .unwrap();
        assert_eq!(raw.pnl.unwrap().to_string(), "11.11");
        assert!(raw.pnl_percent.is_none());
        assert!(raw.total_dividend.is_none());
        assert!(raw.average_cost.is_none());
    }

    #[test]
    fn test_scientific_notation() {
        let raw: RawPayment = serde_json::from_str(r#"{"amount": 5e-6}"#).unwrap();
        assert!(raw.amount.unwrap() > Decimal::ZERO);
    }

    #[test]
    fn test_stringified_year_is_accepted() {
        let raw: RawYearEntry =
            serde_json::from_str(r#"{"year": "2024", "frequency": "monthly"}"#).unwrap();
        assert_eq!(raw.year, Some(2024));
    }

    #[test]
    fn test_unusable_year_becomes_none() {
        let raw: RawSnapshot = serde_json::from_str(
            r#"{"dividendHistory": [{"year": "soon", "payments": []}, {"year": 2025.5}]}"#,
        )
        .unwrap();
        let years = raw.dividend_history.unwrap();
        assert!(years.iter().all(|y| y.year.is_none()));
    }

    #[test]
    fn test_bad_period_becomes_none() {
        let negative: RawPayment = serde_json::from_str(r#"{"period": -1, "amount": 0.25}"#).unwrap();
        assert!(negative.period.is_none());
        assert_eq!(negative.amount.unwrap().to_string(), "0.25");

        let text: RawPayment = serde_json::from_str(r#"{"period": "3"}"#).unwrap();
        assert_eq!(text.period, Some(3));

        let object: RawPayment = serde_json::from_str(r#"{"period": {"m": 3}}"#).unwrap();
        assert!(object.period.is_none());
    }

    #[test]
    fn test_dividends_found_lenient() {
        let raw: RawSummary = serde_json::from_str(r#"{"dividendsFound": "18"}"#).unwrap();
        assert_eq!(raw.dividends_found, Some(18));

        let raw: RawSummary = serde_json::from_str(r#"{"dividendsFound": -2}"#).unwrap();
        assert!(raw.dividends_found.is_none());
    }

    #[test]
    fn test_empty_object() {
        let raw: RawSnapshot = serde_json::from_str("{}").unwrap();
        assert!(raw.dividend_history.is_none());
        assert!(raw.total_investment.is_none());
    }
}
