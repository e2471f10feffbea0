//! Dividend timeline rendering
//!
//! Turns a [`DividendSchedule`] into display rows: one row per year, one dot
//! per payment, with per-year and grand totals recomputed from the payments.
//! Rendering is pure; the current period is an explicit [`AsOf`] input so the
//! same schedule always renders the same way.
//!
//! # Example
//!
//! ```
//! use divdash_sdk::timeline::{render_timeline, AsOf, Timeline};
//! use divdash_types::{DividendFrequency, DividendSchedule, PaymentStatus, YearEntry};
//! use rust_decimal_macros::dec;
//!
//! let schedule = DividendSchedule::new(vec![
//!     YearEntry::new(2025, DividendFrequency::Quarterly)
//!         .with_payment(1, dec!(0.24), PaymentStatus::Paid)
//!         .with_payment(2, dec!(0.25), PaymentStatus::Upcoming),
//! ]);
//!
//! let Timeline::Rows(view) = render_timeline(Some(&schedule), "AAPL", Some(AsOf::new(2025, 2))) else {
//!     panic!("expected rows");
//! };
//! assert_eq!(view.grand_total_display, "$0.49");
//! assert_eq!(view.current().map(|d| d.label.as_str()), Some("Q2"));
//! ```

use chrono::{Datelike, NaiveDate};
use divdash_types::format::{format_currency, DEFAULT_CURRENCY};
use divdash_types::{
    Decimal, DividendFrequency, DividendSchedule, DotSize, PaymentRecord, PaymentStatus,
    PortfolioSnapshot, StatusColor, YearEntry,
};

/// Year and period to highlight as "current"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AsOf {
    pub year: i32,
    /// 1-indexed period in the year's frequency
    pub period: u32,
}

impl AsOf {
    pub fn new(year: i32, period: u32) -> Self {
        Self { year, period }
    }

    /// Period containing `date` under the given frequency
    ///
    /// Months map to 1..=12, quarters to 1..=4, halves to 1..=2 and annual
    /// schedules to 1. Unknown frequencies use the month.
    pub fn from_date(date: NaiveDate, frequency: &DividendFrequency) -> Self {
        let month = date.month();
        let period = match frequency {
            DividendFrequency::Monthly | DividendFrequency::Other(_) => month,
            DividendFrequency::Quarterly => (month - 1) / 3 + 1,
            DividendFrequency::HalfYearly => (month - 1) / 6 + 1,
            DividendFrequency::Annually => 1,
        };
        Self::new(date.year(), period)
    }
}

/// Rendered timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeline {
    /// No schedule, or a schedule without any year entries
    NoData { ticker: String },
    /// At least one year row
    Rows(TimelineView),
}

impl Timeline {
    /// Render the schedule of a snapshot in its own currency
    pub fn for_snapshot(snapshot: &PortfolioSnapshot, as_of: Option<AsOf>) -> Self {
        render_in_currency(
            Some(&snapshot.schedule),
            &snapshot.ticker,
            &snapshot.currency,
            as_of,
        )
    }

    /// Placeholder message when there is nothing to show
    pub fn message(&self) -> Option<String> {
        match self {
            Self::NoData { ticker } => Some(format!("No dividend data available for {}", ticker)),
            Self::Rows(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    pub fn view(&self) -> Option<&TimelineView> {
        match self {
            Self::Rows(view) => Some(view),
            Self::NoData { .. } => None,
        }
    }
}

/// Rows of a non-empty timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineView {
    pub rows: Vec<TimelineRow>,
    /// Sum of all row totals
    pub grand_total: Decimal,
    pub grand_total_display: String,
}

impl TimelineView {
    /// Status legend shown above the rows
    pub fn legend(&self) -> [(&'static str, StatusColor); 3] {
        PaymentStatus::legend()
    }

    /// All dots, row by row
    pub fn dots(&self) -> impl Iterator<Item = &PaymentDot> {
        self.rows.iter().flat_map(|row| row.dots.iter())
    }

    /// The highlighted dot, if any
    pub fn current(&self) -> Option<&PaymentDot> {
        self.dots().find(|dot| dot.is_current)
    }
}

/// One year of the timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRow {
    pub year: i32,
    pub frequency_label: String,
    pub dot_size: DotSize,
    pub dots: Vec<PaymentDot>,
    pub total: Decimal,
    pub total_display: String,
}

/// Indicator for one payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDot {
    pub period: u32,
    pub label: String,
    pub status: PaymentStatus,
    pub color: StatusColor,
    /// `"{label} {year}: {detail}"`
    pub tooltip: String,
    /// Formatted amount, or why there is none
    pub detail: String,
    pub is_current: bool,
}

/// Render a schedule into timeline rows, amounts in the default currency
pub fn render_timeline(
    schedule: Option<&DividendSchedule>,
    ticker: &str,
    as_of: Option<AsOf>,
) -> Timeline {
    render_in_currency(schedule, ticker, DEFAULT_CURRENCY, as_of)
}

fn render_in_currency(
    schedule: Option<&DividendSchedule>,
    ticker: &str,
    currency: &str,
    as_of: Option<AsOf>,
) -> Timeline {
    let Some(schedule) = schedule.filter(|s| !s.is_empty()) else {
        return Timeline::NoData {
            ticker: ticker.to_string(),
        };
    };

    let mut highlighted = false;
    let rows: Vec<TimelineRow> = schedule
        .year_entries
        .iter()
        .map(|entry| render_row(entry, currency, as_of, &mut highlighted))
        .collect();

    let grand_total: Decimal = rows.iter().map(|row| row.total).sum();

    Timeline::Rows(TimelineView {
        grand_total_display: format_currency(grand_total, currency),
        grand_total,
        rows,
    })
}

fn render_row(
    entry: &YearEntry,
    currency: &str,
    as_of: Option<AsOf>,
    highlighted: &mut bool,
) -> TimelineRow {
    let dots = entry
        .payments
        .iter()
        .map(|payment| {
            // Duplicate periods in malformed data must not produce two highlights
            let is_current = !*highlighted
                && as_of.map_or(false, |a| a.year == entry.year && a.period == payment.period);
            *highlighted |= is_current;
            render_dot(entry.year, payment, currency, is_current)
        })
        .collect();

    let total = entry.total();
    TimelineRow {
        year: entry.year,
        frequency_label: entry.frequency.label().to_string(),
        dot_size: entry.frequency.dot_size(),
        dots,
        total,
        total_display: format_currency(total, currency),
    }
}

fn render_dot(year: i32, payment: &PaymentRecord, currency: &str, is_current: bool) -> PaymentDot {
    let detail = if payment.has_amount() {
        format_currency(payment.amount, currency)
    } else if payment.status == PaymentStatus::NotEligible {
        "Not eligible".to_string()
    } else {
        "Pending".to_string()
    };

    PaymentDot {
        period: payment.period,
        label: payment.label.clone(),
        status: payment.status.clone(),
        color: payment.status.color(),
        tooltip: format!("{} {}: {}", payment.label, year, detail),
        detail,
        is_current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn two_years() -> DividendSchedule {
        DividendSchedule::new(vec![
            YearEntry::new(2024, DividendFrequency::Monthly)
                .with_payment(11, dec!(0.25), PaymentStatus::Paid)
                .with_payment(12, dec!(0.25), PaymentStatus::Paid),
            YearEntry::new(2025, DividendFrequency::Monthly)
                .with_payment(1, dec!(0.295), PaymentStatus::Paid)
                .with_payment(7, dec!(0.26785714285714285), PaymentStatus::Upcoming)
                .with_payment(8, dec!(0), PaymentStatus::Pending),
        ])
    }

    #[test]
    fn test_absent_schedule_is_no_data() {
        let timeline = render_timeline(None, "AAPL", None);
        assert_eq!(timeline, Timeline::NoData { ticker: "AAPL".into() });
        assert_eq!(
            timeline.message().as_deref(),
            Some("No dividend data available for AAPL")
        );

        let empty = DividendSchedule::default();
        assert!(render_timeline(Some(&empty), "AAPL", None).is_empty());
    }

    #[test]
    fn test_zero_total_is_not_no_data() {
        let schedule = DividendSchedule::new(vec![YearEntry::new(2025, DividendFrequency::Monthly)
            .with_payment(1, dec!(0), PaymentStatus::Pending)]);
        let timeline = render_timeline(Some(&schedule), "AAPL", None);
        let view = timeline.view().unwrap();
        assert_eq!(view.grand_total, Decimal::ZERO);
        assert_eq!(view.grand_total_display, "$0.00");
        assert!(timeline.message().is_none());
    }

    #[test]
    fn test_totals_are_recomputed() {
        let mut schedule = two_years();
        let view = render_timeline(Some(&schedule), "QQCL.TO", None);
        assert_eq!(view.view().unwrap().grand_total, dec!(1.06285714285714285));

        schedule.year_entries[0].payments[0].amount = dec!(1.25);
        let view = render_timeline(Some(&schedule), "QQCL.TO", None);
        let view = view.view().unwrap();
        assert_eq!(view.rows[0].total, dec!(1.50));
        assert_eq!(view.rows[0].total_display, "$1.50");
        assert_eq!(view.grand_total, dec!(2.06285714285714285));
        assert_eq!(view.grand_total_display, "$2.06");
    }

    #[test]
    fn test_empty_year_still_renders_row() {
        let schedule = DividendSchedule::new(vec![
            YearEntry::new(2023, DividendFrequency::Quarterly),
            YearEntry::new(2024, DividendFrequency::Quarterly)
                .with_payment(1, dec!(0.5), PaymentStatus::Paid),
        ]);
        let timeline = render_timeline(Some(&schedule), "T", None);
        let view = timeline.view().unwrap();
        assert_eq!(view.rows.len(), 2);
        assert!(view.rows[0].dots.is_empty());
        assert_eq!(view.rows[0].total, Decimal::ZERO);
        assert_eq!(view.rows[0].total_display, "$0.00");
        assert_eq!(view.rows[0].dot_size, DotSize::Medium);
        assert_eq!(view.rows[0].frequency_label, "Quarterly");
    }

    #[test]
    fn test_dot_details() {
        let schedule = DividendSchedule::new(vec![YearEntry::new(2025, DividendFrequency::Monthly)
            .with_payment(1, dec!(0.295), PaymentStatus::Paid)
            .with_payment(2, dec!(0), PaymentStatus::NotEligible)
            .with_payment(3, dec!(0), PaymentStatus::Upcoming)
            .with_payment(4, dec!(0), PaymentStatus::from("mystery"))]);
        let timeline = render_timeline(Some(&schedule), "T", None);
        let dots: Vec<&PaymentDot> = timeline.view().unwrap().dots().collect();

        assert_eq!(dots[0].detail, "$0.30");
        assert_eq!(dots[0].tooltip, "Jan 2025: $0.30");
        assert_eq!(dots[0].color, StatusColor::Green);
        assert_eq!(dots[1].detail, "Not eligible");
        assert_eq!(dots[2].detail, "Pending");
        assert_eq!(dots[2].color, StatusColor::Yellow);
        assert_eq!(dots[3].detail, "Pending");
        assert_eq!(dots[3].color, StatusColor::Gray);
    }

    #[test]
    fn test_current_highlight() {
        let schedule = two_years();

        let timeline = render_timeline(Some(&schedule), "T", Some(AsOf::new(2025, 7)));
        let view = timeline.view().unwrap();
        assert_eq!(view.dots().filter(|d| d.is_current).count(), 1);
        let current = view.current().unwrap();
        assert_eq!(current.label, "Jul");
        assert_eq!(current.status, PaymentStatus::Upcoming);

        let timeline = render_timeline(Some(&schedule), "T", Some(AsOf::new(2026, 1)));
        assert!(timeline.view().unwrap().current().is_none());

        let timeline = render_timeline(Some(&schedule), "T", None);
        assert!(timeline.view().unwrap().current().is_none());
    }

    #[test]
    fn test_duplicate_periods_highlight_once() {
        let schedule = DividendSchedule::new(vec![YearEntry::new(2025, DividendFrequency::Monthly)
            .with_payment(3, dec!(0.1), PaymentStatus::Paid)
            .with_payment(3, dec!(0.1), PaymentStatus::Paid)]);
        let timeline = render_timeline(Some(&schedule), "T", Some(AsOf::new(2025, 3)));
        assert_eq!(timeline.view().unwrap().dots().filter(|d| d.is_current).count(), 1);
    }

    #[test]
    fn test_as_of_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 26).unwrap();
        assert_eq!(AsOf::from_date(date, &DividendFrequency::Monthly), AsOf::new(2025, 7));
        assert_eq!(AsOf::from_date(date, &DividendFrequency::Quarterly), AsOf::new(2025, 3));
        assert_eq!(AsOf::from_date(date, &DividendFrequency::HalfYearly), AsOf::new(2025, 2));
        assert_eq!(AsOf::from_date(date, &DividendFrequency::Annually), AsOf::new(2025, 1));

        let march = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        assert_eq!(AsOf::from_date(march, &DividendFrequency::Quarterly), AsOf::new(2025, 1));
    }

    #[test]
    fn test_negative_amounts_pass_through() {
        let schedule = DividendSchedule::new(vec![YearEntry::new(2025, DividendFrequency::Annually)
            .with_payment(1, dec!(-1.5), PaymentStatus::Paid)]);
        let timeline = render_timeline(Some(&schedule), "T", None);
        let view = timeline.view().unwrap();
        assert_eq!(view.grand_total, dec!(-1.5));
        assert_eq!(view.grand_total_display, "-$1.50");
        assert_eq!(view.rows[0].dots[0].detail, "Pending");
    }

    #[test]
    fn test_snapshot_currency() {
        let mut snapshot = crate::sample::sample_snapshot();
        snapshot.currency = "CAD".into();
        let timeline = Timeline::for_snapshot(&snapshot, None);
        assert!(timeline.view().unwrap().grand_total_display.starts_with("CA$"));
    }
}
