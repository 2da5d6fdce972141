//! Shift pricing.
//!
//! Maps a [`Shift`] onto a time interval according to its type, prices the
//! interval, then adds the bonus and meal allowance. Vacation and sick days
//! are paid at the flat day rate without an interval.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::config::RateConfig;
use crate::models::{FlatRateResult, RejectedShift, Shift, ShiftResult, ShiftType, TimedResult};

use super::range_pay::calculate_range_pay;
use super::rounding::round_money;

/// Meal allowance paid for every full six billed hours.
pub const MEAL_ALLOWANCE_PER_SIX_HOURS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Hour fixed shifts start at.
const FIXED_SHIFT_START_HOUR: i64 = 6;

/// Hour a training shift ends at.
const TRAINING_END_HOUR: i64 = 20;

fn at_hour(date: NaiveDate, hour: i64) -> Option<NaiveDateTime> {
    date.and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::hours(hour))
}

/// The billed interval for a timed shift.
///
/// Returns `None` for flat-rate and unrecognized types, for a minus shift
/// missing either clock time, and when the interval would end past the last
/// representable date.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::shift_interval;
/// use shift_payroll::models::{Shift, ShiftType};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
/// let shift = Shift::minus(
///     date,
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
/// );
/// let (start, end) = shift_interval(&shift).unwrap();
/// assert_eq!((end - start).num_hours(), 8);
/// ```
pub fn shift_interval(shift: &Shift) -> Option<(NaiveDateTime, NaiveDateTime)> {
    match shift.shift_type {
        ShiftType::Plus => {
            let start = at_hour(shift.date, FIXED_SHIFT_START_HOUR)?;
            Some((start, start.checked_add_signed(Duration::days(1))?))
        }
        ShiftType::Training => Some((
            at_hour(shift.date, FIXED_SHIFT_START_HOUR)?,
            at_hour(shift.date, TRAINING_END_HOUR)?,
        )),
        ShiftType::Minus => {
            let start = shift.date.and_time(shift.start_time?);
            let end = shift.date.and_time(shift.end_time?);
            if end <= start {
                return Some((start, end.checked_add_signed(Duration::days(1))?));
            }
            Some((start, end))
        }
        ShiftType::Vacation | ShiftType::Sick | ShiftType::Unrecognized => None,
    }
}

/// Meal allowance for a number of billed hours.
pub fn meal_allowance(total_hours: Decimal) -> Decimal {
    (total_hours / Decimal::from(6)).floor() * MEAL_ALLOWANCE_PER_SIX_HOURS
}

/// Prices a single shift.
///
/// Never fails: an unrecognized type, a minus shift without clock times, or a
/// shift running past the last representable date comes back as
/// [`ShiftResult::Rejected`] with zero pay.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::calculate_shift_pay;
/// use shift_payroll::config::RateConfig;
/// use shift_payroll::models::{Shift, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Training shift on Wednesday 2026-03-04: 14h @ 75, plus 2 meal allowances
/// let shift = Shift::new(ShiftType::Training, NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
/// let result = calculate_shift_pay(&shift, &RateConfig::default());
/// assert_eq!(result.total_hours(), Decimal::new(14, 0));
/// assert_eq!(result.meal_allowance(), Decimal::new(60, 0));
/// assert_eq!(result.total_pay(), Decimal::new(1110, 0));
/// ```
pub fn calculate_shift_pay(shift: &Shift, rates: &RateConfig) -> ShiftResult {
    if shift.shift_type.is_flat_rate() {
        return ShiftResult::FlatRate(FlatRateResult {
            shift_type: shift.shift_type,
            total_pay: rates.vacation_day_rate,
        });
    }

    let Some((start, end)) = shift_interval(shift) else {
        let reason = match shift.shift_type {
            ShiftType::Unrecognized => "unrecognized shift type",
            ShiftType::Minus if shift.start_time.is_none() || shift.end_time.is_none() => {
                "minus shift requires start and end times"
            }
            _ => "shift date out of range",
        };
        return ShiftResult::Rejected(RejectedShift {
            shift_type: shift.shift_type,
            reason: reason.to_string(),
        });
    };

    let range = calculate_range_pay(start, end, rates);
    let bonus = if shift.has_bonus {
        rates.bonus_quarterly
    } else {
        Decimal::ZERO
    };
    let meal = meal_allowance(range.total_hours);

    ShiftResult::Timed(TimedResult {
        shift_type: shift.shift_type,
        total_pay: round_money(range.total_pay + bonus + meal),
        total_hours: range.total_hours,
        breakdown: range.breakdown,
        bonus_applied: bonus,
        meal_allowance: meal,
    })
}
