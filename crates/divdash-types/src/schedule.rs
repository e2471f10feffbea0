//! Dividend payment schedule: years, periods and payments
//!
//! Totals are always derived from the payments. Nothing here stores a
//! per-year or per-schedule total, so a changed payment amount is reflected
//! everywhere it is summed.

use crate::enums::{DividendFrequency, PaymentStatus};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;

/// A single dividend payment (or expected payment) within a year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// 1-indexed period; meaning depends on the year's frequency
    pub period: u32,
    /// Cash amount in the portfolio's base currency
    pub amount: Decimal,
    /// Settlement status
    pub status: PaymentStatus,
    /// Short display label ("Jan", "Q1")
    pub label: String,
}

impl PaymentRecord {
    /// Create a payment with an explicit label
    pub fn new(
        period: u32,
        amount: Decimal,
        status: PaymentStatus,
        label: impl Into<String>,
    ) -> Self {
        Self {
            period,
            amount,
            status,
            label: label.into(),
        }
    }

    /// Returns true if cash was (or is projected to be) received
    pub fn has_amount(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// All payments of one calendar year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearEntry {
    /// Calendar year
    pub year: i32,
    /// Frequency shared by every payment in this year
    pub frequency: DividendFrequency,
    /// Payments ordered by ascending period
    pub payments: Vec<PaymentRecord>,
}

impl YearEntry {
    /// Create an empty year
    pub fn new(year: i32, frequency: DividendFrequency) -> Self {
        Self {
            year,
            frequency,
            payments: Vec::new(),
        }
    }

    /// Append a payment, deriving its label from the frequency
    pub fn with_payment(mut self, period: u32, amount: Decimal, status: PaymentStatus) -> Self {
        let label = self.frequency.period_label(period);
        self.payments.push(PaymentRecord::new(period, amount, status, label));
        self
    }

    /// Sum of all payment amounts in this year
    pub fn total(&self) -> Decimal {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Returns true if the year has no payments at all
    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// Look up the payment for a period
    pub fn payment(&self, period: u32) -> Option<&PaymentRecord> {
        self.payments.iter().find(|p| p.period == period)
    }

    /// Payments with the given status
    pub fn payments_with_status<'a>(
        &'a self,
        status: &'a PaymentStatus,
    ) -> impl Iterator<Item = &'a PaymentRecord> + 'a {
        self.payments.iter().filter(move |p| &p.status == status)
    }

    /// Check the year against the schedule invariants
    pub fn validate(&self) -> Vec<ScheduleIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        let mut last_period = 0;

        for payment in &self.payments {
            if !seen.insert(payment.period) {
                issues.push(ScheduleIssue::DuplicatePeriod {
                    year: self.year,
                    period: payment.period,
                });
            }

            if !self.frequency.contains_period(payment.period) {
                issues.push(ScheduleIssue::PeriodOutOfRange {
                    year: self.year,
                    period: payment.period,
                    frequency: self.frequency.as_str().to_string(),
                });
            }

            if payment.period < last_period {
                issues.push(ScheduleIssue::PeriodsOutOfOrder { year: self.year });
            }
            last_period = payment.period;

            if payment.amount.is_sign_negative() && !payment.amount.is_zero() {
                issues.push(ScheduleIssue::NegativeAmount {
                    year: self.year,
                    period: payment.period,
                });
            } else if payment.status.is_cashless() && !payment.amount.is_zero() {
                issues.push(ScheduleIssue::CashWithoutPayment {
                    year: self.year,
                    period: payment.period,
                    status: payment.status.as_str().to_string(),
                });
            }
        }

        issues
    }
}

/// Dividend history of one ticker, ordered by ascending year
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct DividendSchedule {
    pub year_entries: Vec<YearEntry>,
}

impl DividendSchedule {
    /// Create a schedule from year entries
    pub fn new(year_entries: Vec<YearEntry>) -> Self {
        Self { year_entries }
    }

    /// Returns true if there are no year entries
    ///
    /// A schedule with entries whose payments sum to zero is NOT empty.
    pub fn is_empty(&self) -> bool {
        self.year_entries.is_empty()
    }

    /// Sum of every year's total
    pub fn total(&self) -> Decimal {
        self.year_entries.iter().map(YearEntry::total).sum()
    }

    /// Look up a year
    pub fn year(&self, year: i32) -> Option<&YearEntry> {
        self.year_entries.iter().find(|e| e.year == year)
    }

    /// Iterate all payments together with their year
    pub fn payments(&self) -> impl Iterator<Item = (i32, &PaymentRecord)> {
        self.year_entries
            .iter()
            .flat_map(|e| e.payments.iter().map(move |p| (e.year, p)))
    }

    /// Number of payments across all years
    pub fn payment_count(&self) -> usize {
        self.year_entries.iter().map(|e| e.payments.len()).sum()
    }

    /// Number of payments marked as paid
    pub fn paid_count(&self) -> usize {
        self.payments()
            .filter(|(_, p)| p.status == PaymentStatus::Paid)
            .count()
    }

    /// Check every year and the year ordering against the schedule invariants
    pub fn validate(&self) -> Vec<ScheduleIssue> {
        let mut issues = Vec::new();
        let mut previous: Option<i32> = None;

        for entry in &self.year_entries {
            if let Some(prev) = previous {
                if entry.year <= prev {
                    issues.push(ScheduleIssue::YearsOutOfOrder {
                        previous: prev,
                        year: entry.year,
                    });
                }
            }
            previous = Some(entry.year);
            issues.extend(entry.validate());
        }

        issues
    }
}

/// A violated schedule invariant
///
/// Issues are diagnostic; the timeline renders the data regardless.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleIssue {
    #[error("{year}: period {period} appears more than once")]
    DuplicatePeriod { year: i32, period: u32 },

    #[error("{year}: period {period} is outside the {frequency} range")]
    PeriodOutOfRange {
        year: i32,
        period: u32,
        frequency: String,
    },

    #[error("{year}: payments are not ordered by period")]
    PeriodsOutOfOrder { year: i32 },

    #[error("{year}: period {period} has a negative amount")]
    NegativeAmount { year: i32, period: u32 },

    #[error("{year}: period {period} is {status} but carries a cash amount")]
    CashWithoutPayment {
        year: i32,
        period: u32,
        status: String,
    },

    #[error("year {year} follows {previous}; years must be strictly ascending")]
    YearsOutOfOrder { previous: i32, year: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quarterly_2024() -> YearEntry {
        YearEntry::new(2024, DividendFrequency::Quarterly)
            .with_payment(1, dec!(0.24), PaymentStatus::Paid)
            .with_payment(2, dec!(0.24), PaymentStatus::Paid)
            .with_payment(3, dec!(0.25), PaymentStatus::Upcoming)
            .with_payment(4, Decimal::ZERO, PaymentStatus::Pending)
    }

    #[test]
    fn test_year_total_is_sum_of_payments() {
        let entry = quarterly_2024();
        assert_eq!(entry.total(), dec!(0.73));
        assert_eq!(entry.payments[2].label, "Q3");
    }

    #[test]
    fn test_total_tracks_mutation() {
        let mut schedule = DividendSchedule::new(vec![quarterly_2024()]);
        assert_eq!(schedule.total(), dec!(0.73));

        schedule.year_entries[0].payments[0].amount = dec!(1.00);
        assert_eq!(schedule.total(), dec!(1.49));
    }

    #[test]
    fn test_empty_year_contributes_zero() {
        let schedule = DividendSchedule::new(vec![
            quarterly_2024(),
            YearEntry::new(2025, DividendFrequency::Quarterly),
        ]);
        assert_eq!(schedule.total(), dec!(0.73));
        assert!(!schedule.is_empty());
        assert!(schedule.year(2025).unwrap().is_empty());
    }

    #[test]
    fn test_zero_sum_schedule_is_not_empty() {
        let schedule = DividendSchedule::new(vec![YearEntry::new(2024, DividendFrequency::Annually)
            .with_payment(1, Decimal::ZERO, PaymentStatus::NotEligible)]);
        assert!(!schedule.is_empty());
        assert_eq!(schedule.total(), Decimal::ZERO);
        assert!(DividendSchedule::default().is_empty());
    }

    #[test]
    fn test_validate_clean_schedule() {
        let schedule = DividendSchedule::new(vec![quarterly_2024()]);
        assert!(schedule.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_issues() {
        let bad = YearEntry::new(2024, DividendFrequency::HalfYearly)
            .with_payment(1, dec!(0.5), PaymentStatus::Paid)
            .with_payment(1, dec!(0.5), PaymentStatus::Paid)
            .with_payment(3, dec!(0.1), PaymentStatus::Pending);
        let schedule = DividendSchedule::new(vec![bad, YearEntry::new(2023, DividendFrequency::Monthly)]);

        let issues = schedule.validate();
        assert!(issues.contains(&ScheduleIssue::YearsOutOfOrder {
            previous: 2024,
            year: 2023
        }));
        assert!(issues.contains(&ScheduleIssue::DuplicatePeriod {
            year: 2024,
            period: 1
        }));
        assert!(issues
            .iter()
            .any(|i| matches!(i, ScheduleIssue::PeriodOutOfRange { period: 3, .. })));
        assert!(issues
            .iter()
            .any(|i| matches!(i, ScheduleIssue::CashWithoutPayment { period: 3, .. })));
    }

    #[test]
    fn test_counts() {
        let schedule = DividendSchedule::new(vec![quarterly_2024()]);
        assert_eq!(schedule.payment_count(), 4);
        assert_eq!(schedule.paid_count(), 2);
        assert_eq!(schedule.payments().count(), 4);
    }
}
