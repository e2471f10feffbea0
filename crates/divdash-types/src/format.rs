//! Display formatters for monetary, percentage and date values
//!
//! All formatters are total: absent input (`None`, `NaN`, infinities) renders
//! as a zero-valued string instead of failing or leaking `NaN` into the view.
//! Output follows en-US conventions (comma grouping, `.` decimal point).

use chrono::{DateTime, NaiveDate};
use rust_decimal::prelude::{FromPrimitive, RoundingStrategy};
use rust_decimal::Decimal;

/// A value that can be fed to the display formatters
///
/// Returns `None` for values that have no sensible numeric display.
pub trait DisplayNumber {
    /// Convert to a decimal, or `None` if the value is absent or not finite
    fn to_decimal(&self) -> Option<Decimal>;
}

impl DisplayNumber for Decimal {
    fn to_decimal(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl DisplayNumber for f64 {
    fn to_decimal(&self) -> Option<Decimal> {
        if self.is_finite() {
            Decimal::from_f64(*self)
        } else {
            None
        }
    }
}

impl DisplayNumber for f32 {
    fn to_decimal(&self) -> Option<Decimal> {
        (*self as f64).to_decimal()
    }
}

impl DisplayNumber for i64 {
    fn to_decimal(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

impl DisplayNumber for i32 {
    fn to_decimal(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

impl DisplayNumber for u32 {
    fn to_decimal(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

impl DisplayNumber for u64 {
    fn to_decimal(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }
}

impl<T: DisplayNumber> DisplayNumber for Option<T> {
    fn to_decimal(&self) -> Option<Decimal> {
        self.as_ref().and_then(DisplayNumber::to_decimal)
    }
}

impl<T: DisplayNumber + ?Sized> DisplayNumber for &T {
    fn to_decimal(&self) -> Option<Decimal> {
        (**self).to_decimal()
    }
}

/// Base currency used when none is specified
pub const DEFAULT_CURRENCY: &str = "USD";

/// Format a monetary amount, e.g. `"$1,234.56"` or `"-$12.30"`
pub fn format_currency(value: impl DisplayNumber, currency: &str) -> String {
    let amount = value.to_decimal().unwrap_or(Decimal::ZERO);
    let rounded = round_half_away(amount, 2);
    let body = group_fixed(rounded.abs(), 2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}", sign, symbol, body),
        None => format!("{}{} {}", sign, currency.to_ascii_uppercase(), body),
    }
}

/// Format a monetary amount in the default (USD) currency
pub fn format_usd(value: impl DisplayNumber) -> String {
    format_currency(value, DEFAULT_CURRENCY)
}

/// Format a percentage with a fixed number of decimals, e.g. `"12.34%"`
///
/// Absent input always renders as `"0.00%"`.
pub fn format_percent(value: impl DisplayNumber, decimals: u32) -> String {
    match value.to_decimal() {
        Some(v) => format!("{}%", fixed(v, decimals)),
        None => "0.00%".to_string(),
    }
}

/// Format a number with grouping and a fixed number of decimals
pub fn format_number(value: impl DisplayNumber, decimals: u32) -> String {
    match value.to_decimal() {
        Some(v) => {
            let rounded = round_half_away(v, decimals);
            let body = group_fixed(rounded.abs(), decimals);
            if rounded.is_sign_negative() && !rounded.is_zero() {
                format!("-{}", body)
            } else {
                body
            }
        }
        None => "0.00".to_string(),
    }
}

/// Abbreviate large values: `1.2M`, `3.4K`, otherwise the plain value
pub fn format_compact_number(value: impl DisplayNumber) -> String {
    let Some(v) = value.to_decimal() else {
        return "0".to_string();
    };

    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);

    if v >= million {
        format!("{}M", fixed(v / million, 1))
    } else if v >= thousand {
        format!("{}K", fixed(v / thousand, 1))
    } else {
        v.normalize().to_string()
    }
}

/// Format a date string (`YYYY-MM-DD` or RFC 3339) as `"Jan 5, 2024"`
///
/// Returns `"N/A"` for absent or blank input and `"Invalid Date"` when the
/// input cannot be parsed.
pub fn format_date(input: Option<&str>) -> String {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };

    match parse_date(raw) {
        Some(date) => format_naive_date(date),
        None => "Invalid Date".to_string(),
    }
}

/// Format a calendar date as `"Jan 5, 2024"`
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Percentage change from `previous` to `current`; zero when `previous` is zero
pub fn percentage_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return Decimal::ZERO;
    }
    (current - previous) / previous * Decimal::ONE_HUNDRED
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "CAD" => Some("CA$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        _ => None,
    }
}

fn round_half_away(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Fixed-point rendering without grouping; negative zero collapses to zero
fn fixed(value: Decimal, decimals: u32) -> String {
    let rounded = round_half_away(value, decimals);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.*}", decimals as usize, rounded)
}

/// Fixed-point rendering of a non-negative value with comma grouping
fn group_fixed(value: Decimal, decimals: u32) -> String {
    let plain = fixed(value, decimals);
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}
