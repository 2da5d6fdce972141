//! Shift model and related types.
//!
//! A [`Shift`] is a request descriptor: the type of shift worked on a date,
//! plus clock times for variable-length shifts. Pricing it is the job of
//! [`calculate_shift_pay`](crate::calculation::calculate_shift_pay).

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of shift worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Fixed 24-hour shift, 06:00 to 06:00 the next day.
    Plus,
    /// Fixed 14-hour shift, 06:00 to 20:00.
    Training,
    /// Variable shift with caller-supplied start and end times.
    Minus,
    /// Vacation day, paid at the flat day rate.
    Vacation,
    /// Sick day, paid at the flat day rate.
    Sick,
    /// Any type name the engine does not know. Priced as an error result.
    #[serde(other)]
    Unrecognized,
}

impl ShiftType {
    /// Returns true for types paid at the flat day rate.
    pub fn is_flat_rate(self) -> bool {
        matches!(self, ShiftType::Vacation | ShiftType::Sick)
    }

    /// The wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftType::Plus => "plus",
            ShiftType::Training => "training",
            ShiftType::Minus => "minus",
            ShiftType::Vacation => "vacation",
            ShiftType::Sick => "sick",
            ShiftType::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shift to be priced.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{Shift, ShiftType};
/// use chrono::NaiveDate;
///
/// let shift = Shift::new(ShiftType::Plus, NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
/// assert!(shift.validate().is_ok());
/// assert!(!shift.has_bonus);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The kind of shift.
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// Clock-in time; required for minus shifts.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Clock-out time; required for minus shifts. Rolls to the next day when not after the start.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Whether the quarterly bonus is paid with this shift.
    #[serde(default)]
    pub has_bonus: bool,
}

impl Shift {
    /// Creates a shift of the given type with no times and no bonus.
    pub fn new(shift_type: ShiftType, date: NaiveDate) -> Self {
        Self {
            shift_type,
            date,
            start_time: None,
            end_time: None,
            has_bonus: false,
        }
    }

    /// Creates a minus shift between two clock times.
    pub fn minus(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            shift_type: ShiftType::Minus,
            date,
            start_time: Some(start_time),
            end_time: Some(end_time),
            has_bonus: false,
        }
    }

    /// Marks the shift as carrying the quarterly bonus.
    pub fn with_bonus(mut self) -> Self {
        self.has_bonus = true;
        self
    }

    /// Checks the fields a shift's type requires.
    ///
    /// Intended for the input boundary; the engine itself prices an invalid
    /// shift as an error result instead of failing.
    pub fn validate(&self) -> EngineResult<()> {
        match self.shift_type {
            ShiftType::Minus if self.start_time.is_none() || self.end_time.is_none() => {
                Err(EngineError::InvalidShift {
                    date: self.date,
                    message: "minus shift requires start and end times".to_string(),
                })
            }
            ShiftType::Unrecognized => Err(EngineError::InvalidShift {
                date: self.date,
                message: "unrecognized shift type".to_string(),
            }),
            // Plus and overnight minus shifts end on the following day
            ShiftType::Plus | ShiftType::Minus if self.date.succ_opt().is_none() => {
                Err(EngineError::InvalidShift {
                    date: self.date,
                    message: "shift date out of range".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    #[test]
    fn test_deserialize_plus_shift() {
        let json = r#"{ "type": "plus", "date": "2026-03-04" }"#;
        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.shift_type, ShiftType::Plus);
        assert_eq!(shift.date, make_date("2026-03-04"));
        assert!(shift.start_time.is_none());
        assert!(!shift.has_bonus);
    }

    #[test]
    fn test_deserialize_minus_shift_with_times() {
        let json = r#"{
            "type": "minus",
            "date": "2026-03-04",
            "start_time": "22:00:00",
            "end_time": "06:30:00",
            "has_bonus": true
        }"#;
        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.shift_type, ShiftType::Minus);
        assert_eq!(shift.start_time, Some(make_time("22:00")));
        assert_eq!(shift.end_time, Some(make_time("06:30")));
        assert!(shift.has_bonus);
    }

    #[test]
    fn test_unknown_type_deserializes_as_unrecognized() {
        let json = r#"{ "type": "holiday", "date": "2026-03-04" }"#;
        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.shift_type, ShiftType::Unrecognized);
    }

    #[test]
    fn test_flat_rate_types() {
        assert!(ShiftType::Vacation.is_flat_rate());
        assert!(ShiftType::Sick.is_flat_rate());
        assert!(!ShiftType::Plus.is_flat_rate());
        assert!(!ShiftType::Minus.is_flat_rate());
    }

    #[test]
    fn test_validate_minus_without_times_fails() {
        let shift = Shift::new(ShiftType::Minus, make_date("2026-03-04"));
        match shift.validate() {
            Err(EngineError::InvalidShift { date, message }) => {
                assert_eq!(date, make_date("2026-03-04"));
                assert!(message.contains("start and end"));
            }
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_minus_with_times_passes() {
        let shift = Shift::minus(make_date("2026-03-04"), make_time("08:00"), make_time("16:00"));
        assert!(shift.validate().is_ok());
    }

    #[test]
    fn test_validate_unrecognized_fails() {
        let shift = Shift::new(ShiftType::Unrecognized, make_date("2026-03-04"));
        assert!(shift.validate().is_err());
    }

    #[test]
    fn test_validate_last_date_plus_fails() {
        let shift = Shift::new(ShiftType::Plus, NaiveDate::MAX);
        match shift.validate() {
            Err(EngineError::InvalidShift { message, .. }) => {
                assert_eq!(message, "shift date out of range");
            }
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
        assert!(Shift::new(ShiftType::Training, NaiveDate::MAX).validate().is_ok());
    }

    #[test]
    fn test_shift_serialization_round_trip() {
        let shift = Shift::minus(make_date("2026-03-06"), make_time("16:00"), make_time("23:00"))
            .with_bonus();
        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains(r#""type":"minus""#));
        let deserialized: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }
}
