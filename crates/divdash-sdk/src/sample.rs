//! Bundled sample data
//!
//! Shown before the first analysis and whenever an analysis fails.

use divdash_types::{
    AnalysisForm, DividendFrequency, DividendMetrics, DividendSchedule, PaymentStatus,
    PortfolioSnapshot, Timeframe, YearEntry,
};
use rust_decimal_macros::dec;

/// Ticker of the bundled sample position
pub const SAMPLE_TICKER: &str = "QQCL.TO";

/// Form values the dashboard starts with
pub fn default_form() -> AnalysisForm {
    AnalysisForm::new(SAMPLE_TICKER, Timeframe::OneDay, 1, "2024-05-01", "2025-07-26")
}

/// Static sample snapshot: a monthly payer held from May 2024 to July 2025
pub fn sample_snapshot() -> PortfolioSnapshot {
    let schedule = sample_schedule();
    let dividends_found = schedule.paid_count() as u32;

    PortfolioSnapshot {
        ticker: SAMPLE_TICKER.to_string(),
        currency: "USD".to_string(),
        total_investment: dec!(406.490001),
        total_value_today: dec!(417.59999999999997),
        average_cost: dec!(22.582777833333335),
        total_shares: dec!(18),
        pnl: dec!(11.10999899999996),
        pnl_percent: dec!(2.7331543144157093),
        pnl_with_dividend: dec!(75.85999899999997),
        pnl_with_dividend_percent: dec!(18.662205420398514),
        total_dividend: dec!(64.75),
        total_div_percent: dec!(15.929051105982806),
        last_dividend_yield: dec!(15.258620689655173),
        ttm_dividend_yield: dec!(14.00862068965517),
        yield_on_cost: dec!(15.675662339354812),
        dividend_frequency: DividendFrequency::Monthly,
        frequency_confidence: None,
        frequency_reason: None,
        dividends_found,
        dividend_metrics: DividendMetrics::default(),
        schedule,
    }
}

fn sample_schedule() -> DividendSchedule {
    let first_months = dec!(0.26785714285714285);

    let y2024 = (1..=12).fold(YearEntry::new(2024, DividendFrequency::Monthly), |year, month| {
        let amount = if month <= 4 { first_months } else { dec!(0.25) };
        year.with_payment(month, amount, PaymentStatus::Paid)
    });

    let paid_2025 = [dec!(0.295), dec!(0.295), dec!(0.295), dec!(0.275), dec!(0.295), dec!(0.295)];
    let mut y2025 = YearEntry::new(2025, DividendFrequency::Monthly);
    for (month, amount) in (1..).zip(paid_2025) {
        y2025 = y2025.with_payment(month, amount, PaymentStatus::Paid);
    }
    y2025 = y2025.with_payment(7, first_months, PaymentStatus::Upcoming);
    for month in 8..=12 {
        y2025 = y2025.with_payment(month, dec!(0), PaymentStatus::Pending);
    }

    DividendSchedule::new(vec![y2024, y2025])
}
