//! Pay result models.
//!
//! This module contains the [`ShiftResult`] sum type returned by shift pricing
//! and the [`RangePay`] result of integrating rates over a time range.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ShiftType;

/// The rate window a minute of work falls in.
///
/// # Example
///
/// ```
/// use shift_payroll::models::PayCategory;
///
/// assert_eq!(PayCategory::from_flags(true, true), PayCategory::WeekendRest);
/// assert_eq!(PayCategory::from_flags(false, false), PayCategory::Regular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Outside both windows.
    Regular,
    /// Friday 16:00 to Sunday 06:00, outside the rest window.
    Weekend,
    /// 00:00 to 06:00 on a weekday.
    Rest,
    /// 00:00 to 06:00 inside the weekend window.
    WeekendRest,
}

impl PayCategory {
    /// Maps the two window flags onto a category.
    pub fn from_flags(is_weekend: bool, is_rest: bool) -> Self {
        match (is_weekend, is_rest) {
            (true, true) => PayCategory::WeekendRest,
            (false, true) => PayCategory::Rest,
            (true, false) => PayCategory::Weekend,
            (false, false) => PayCategory::Regular,
        }
    }
}

/// Pay split by rate window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Pay at the base rate.
    pub regular: Decimal,
    /// Pay at the weekend rate.
    pub weekend: Decimal,
    /// Pay at the rest rate.
    pub rest: Decimal,
    /// Pay at the combined weekend and rest rate.
    pub weekend_rest: Decimal,
}

impl PayBreakdown {
    /// Adds `amount` to the bucket for `category`.
    pub fn accrue(&mut self, category: PayCategory, amount: Decimal) {
        let bucket = match category {
            PayCategory::Regular => &mut self.regular,
            PayCategory::Weekend => &mut self.weekend,
            PayCategory::Rest => &mut self.rest,
            PayCategory::WeekendRest => &mut self.weekend_rest,
        };
        *bucket += amount;
    }

    /// Sum of all four buckets.
    pub fn total(&self) -> Decimal {
        self.regular + self.weekend + self.rest + self.weekend_rest
    }

    /// Applies `f` to every bucket.
    pub fn map(self, f: impl Fn(Decimal) -> Decimal) -> Self {
        Self {
            regular: f(self.regular),
            weekend: f(self.weekend),
            rest: f(self.rest),
            weekend_rest: f(self.weekend_rest),
        }
    }
}

/// Pay accrued over a continuous time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePay {
    /// Total pay, rounded to cents.
    pub total_pay: Decimal,
    /// Number of billed minutes.
    pub total_minutes: i64,
    /// Billed hours, rounded to two places.
    pub total_hours: Decimal,
    /// Pay per rate window, each rounded to cents.
    pub breakdown: PayBreakdown,
}

impl RangePay {
    /// The result for an empty or inverted range.
    pub fn zero() -> Self {
        Self {
            total_pay: Decimal::ZERO,
            total_minutes: 0,
            total_hours: Decimal::ZERO,
            breakdown: PayBreakdown::default(),
        }
    }
}

/// A shift paid at the flat day rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRateResult {
    /// Vacation or sick.
    pub shift_type: ShiftType,
    /// The flat day rate.
    pub total_pay: Decimal,
}

/// A shift priced over a time interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedResult {
    /// Plus, training or minus.
    pub shift_type: ShiftType,
    /// Interval pay plus bonus plus meal allowance, rounded to cents.
    pub total_pay: Decimal,
    /// Billed hours.
    pub total_hours: Decimal,
    /// Interval pay per rate window.
    pub breakdown: PayBreakdown,
    /// Bonus folded into `total_pay`.
    pub bonus_applied: Decimal,
    /// Meal allowance folded into `total_pay`.
    pub meal_allowance: Decimal,
}

/// A shift the engine could not price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedShift {
    /// The type as received.
    pub shift_type: ShiftType,
    /// Why the shift was not priced.
    pub reason: String,
}

/// The outcome of pricing a single shift.
///
/// Each shape carries only the fields that make sense for it; the accessor
/// methods give the flat view consumers such as monthly totals need.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{FlatRateResult, ShiftResult, ShiftType};
/// use rust_decimal::Decimal;
///
/// let result = ShiftResult::FlatRate(FlatRateResult {
///     shift_type: ShiftType::Vacation,
///     total_pay: Decimal::new(1750, 0),
/// });
/// assert!(result.is_flat_rate());
/// assert_eq!(result.total_hours(), Decimal::ZERO);
/// assert!(result.breakdown().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShiftResult {
    /// Vacation or sick day.
    FlatRate(FlatRateResult),
    /// Plus, training or minus shift.
    Timed(TimedResult),
    /// Unknown type or missing data.
    Rejected(RejectedShift),
}

impl ShiftResult {
    /// The type of the priced shift.
    pub fn shift_type(&self) -> ShiftType {
        match self {
            ShiftResult::FlatRate(r) => r.shift_type,
            ShiftResult::Timed(r) => r.shift_type,
            ShiftResult::Rejected(r) => r.shift_type,
        }
    }

    /// Total pay; zero for a rejected shift.
    pub fn total_pay(&self) -> Decimal {
        match self {
            ShiftResult::FlatRate(r) => r.total_pay,
            ShiftResult::Timed(r) => r.total_pay,
            ShiftResult::Rejected(_) => Decimal::ZERO,
        }
    }

    /// Billed hours; zero unless timed.
    pub fn total_hours(&self) -> Decimal {
        match self {
            ShiftResult::Timed(r) => r.total_hours,
            _ => Decimal::ZERO,
        }
    }

    /// Bonus included in the pay; zero unless timed.
    pub fn bonus_applied(&self) -> Decimal {
        match self {
            ShiftResult::Timed(r) => r.bonus_applied,
            _ => Decimal::ZERO,
        }
    }

    /// Meal allowance included in the pay; zero unless timed.
    pub fn meal_allowance(&self) -> Decimal {
        match self {
            ShiftResult::Timed(r) => r.meal_allowance,
            _ => Decimal::ZERO,
        }
    }

    /// The per-window breakdown, present only for timed shifts.
    pub fn breakdown(&self) -> Option<&PayBreakdown> {
        match self {
            ShiftResult::Timed(r) => Some(&r.breakdown),
            _ => None,
        }
    }

    /// Returns true for vacation and sick days.
    pub fn is_flat_rate(&self) -> bool {
        matches!(self, ShiftResult::FlatRate(_))
    }

    /// Returns true when the shift could not be priced.
    pub fn is_error(&self) -> bool {
        matches!(self, ShiftResult::Rejected(_))
    }
}
