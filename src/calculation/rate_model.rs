//! Rate windows and the hourly rate at an instant.
//!
//! Two windows modify the base rate:
//! - weekend: Friday 16:00 through Sunday 06:00
//! - rest: 00:00 to 06:00 every day
//!
//! Inside both, the multipliers compound.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateConfig;
use crate::models::PayCategory;

/// Hour at which the Friday weekend window opens.
pub const WEEKEND_START_HOUR: u32 = 16;

/// Hour at which the nightly rest window (and the Sunday weekend window) closes.
pub const REST_END_HOUR: u32 = 6;

/// The rate in effect at an instant and the windows it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateInfo {
    /// Hourly rate.
    pub rate: Decimal,
    /// Inside the weekend window.
    pub is_weekend: bool,
    /// Inside the rest window.
    pub is_rest: bool,
}

impl RateInfo {
    /// The breakdown bucket for this instant.
    pub fn category(&self) -> PayCategory {
        PayCategory::from_flags(self.is_weekend, self.is_rest)
    }
}

/// Returns true inside the weekend window.
pub fn is_weekend(at: NaiveDateTime) -> bool {
    let hour = at.hour();
    match at.weekday() {
        Weekday::Fri => hour >= WEEKEND_START_HOUR,
        Weekday::Sat => true,
        Weekday::Sun => hour < REST_END_HOUR,
        _ => false,
    }
}

/// Returns true inside the nightly rest window.
pub fn is_rest(at: NaiveDateTime) -> bool {
    at.hour() < REST_END_HOUR
}

/// Determines the hourly rate at `at`.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::rate_at;
/// use shift_payroll::config::RateConfig;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// // 2026-03-07 is a Saturday
/// let at = NaiveDateTime::parse_from_str("2026-03-07 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let info = rate_at(at, &RateConfig::default());
/// assert!(info.is_weekend && info.is_rest);
/// assert_eq!(info.rate, Decimal::new(5625, 2)); // 75 × 1.5 × 0.5
/// ```
pub fn rate_at(at: NaiveDateTime, rates: &RateConfig) -> RateInfo {
    let is_weekend = is_weekend(at);
    let is_rest = is_rest(at);

    let base = if is_weekend {
        rates.base_rate * rates.weekend_multiplier
    } else {
        rates.base_rate
    };
    let rate = if is_rest {
        base * rates.rest_multiplier
    } else {
        base
    };

    RateInfo {
        rate,
        is_weekend,
        is_rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    // 2026-03-04 Wed, 03-06 Fri, 03-07 Sat, 03-08 Sun

    #[test]
    fn test_weekday_daytime_is_regular() {
        let info = rate_at(make_datetime("2026-03-04 10:00"), &RateConfig::default());
        assert_eq!(info.rate, dec("75"));
        assert_eq!(info.category(), PayCategory::Regular);
    }

    #[test]
    fn test_weekday_night_is_rest() {
        let info = rate_at(make_datetime("2026-03-05 03:00"), &RateConfig::default());
        assert_eq!(info.rate, dec("37.5"));
        assert_eq!(info.category(), PayCategory::Rest);
    }

    #[test]
    fn test_friday_boundary_at_16() {
        let rates = RateConfig::default();
        let before = rate_at(make_datetime("2026-03-06 15:59"), &rates);
        let after = rate_at(make_datetime("2026-03-06 16:00"), &rates);
        assert!(!before.is_weekend);
        assert_eq!(before.rate, dec("75"));
        assert!(after.is_weekend);
        assert_eq!(after.rate, dec("112.5"));
    }

    #[test]
    fn test_friday_early_morning_is_rest_not_weekend() {
        let info = rate_at(make_datetime("2026-03-06 02:00"), &RateConfig::default());
        assert!(!info.is_weekend);
        assert!(info.is_rest);
        assert_eq!(info.rate, dec("37.5"));
    }

    #[test]
    fn test_saturday_all_day_is_weekend() {
        let rates = RateConfig::default();
        assert_eq!(rate_at(make_datetime("2026-03-07 12:00"), &rates).rate, dec("112.5"));
        assert_eq!(rate_at(make_datetime("2026-03-07 23:59"), &rates).rate, dec("112.5"));
        let night = rate_at(make_datetime("2026-03-07 00:00"), &rates);
        assert_eq!(night.category(), PayCategory::WeekendRest);
        assert_eq!(night.rate, dec("56.25"));
    }

    #[test]
    fn test_sunday_boundary_at_06() {
        let rates = RateConfig::default();
        let before = rate_at(make_datetime("2026-03-08 05:59"), &rates);
        let after = rate_at(make_datetime("2026-03-08 06:00"), &rates);
        assert_eq!(before.category(), PayCategory::WeekendRest);
        assert_eq!(after.category(), PayCategory::Regular);
        assert_eq!(after.rate, dec("75"));
    }

    #[test]
    fn test_multipliers_compound() {
        let rates = RateConfig {
            base_rate: dec("100"),
            weekend_multiplier: dec("2"),
            rest_multiplier: dec("1.25"),
            ..RateConfig::default()
        };
        let info = rate_at(make_datetime("2026-03-07 01:00"), &rates);
        assert_eq!(info.rate, dec("250"));
    }
}
