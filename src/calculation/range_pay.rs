//! Pay over a continuous time range.
//!
//! The range is billed in whole-minute ticks starting at `start`. Each tick is
//! priced at the rate in effect at its first instant, so a tick that straddles
//! a window boundary is billed entirely at the earlier rate.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::{PayBreakdown, RangePay};

use super::rate_model::rate_at;
use super::rounding::round_money;

const MINUTES_PER_HOUR: i64 = 60;

/// Integrates the hourly rate over `[start, end)`.
///
/// An empty or inverted range yields [`RangePay::zero`].
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::calculate_range_pay;
/// use shift_payroll::config::RateConfig;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-03-04 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-04 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let pay = calculate_range_pay(start, end, &RateConfig::default());
/// assert_eq!(pay.total_pay, Decimal::new(600, 0));
/// assert_eq!(pay.total_minutes, 480);
/// ```
pub fn calculate_range_pay(start: NaiveDateTime, end: NaiveDateTime, rates: &RateConfig) -> RangePay {
    if start >= end {
        return RangePay::zero();
    }

    let per_hour = Decimal::from(MINUTES_PER_HOUR);
    let tick = Duration::minutes(1);
    let mut breakdown = PayBreakdown::default();
    let mut total = Decimal::ZERO;
    let mut minutes: i64 = 0;

    let mut at = start;
    while at < end {
        let info = rate_at(at, rates);
        let per_minute = info.rate / per_hour;
        total += per_minute;
        breakdown.accrue(info.category(), per_minute);
        minutes += 1;
        at += tick;
    }

    RangePay {
        total_pay: round_money(total),
        total_minutes: minutes,
        total_hours: round_money(Decimal::from(minutes) / per_hour),
        breakdown: breakdown.map(round_money),
    }
}
