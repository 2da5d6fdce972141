//! Error types for the payroll engine.
//!
//! Calculations are total over well-formed input, so the variants here cover
//! tax-year table loading and lookup, and validation done at the boundary
//! before a shift or month reaches the engine.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use shift_payroll::error::EngineError;
///
/// let error = EngineError::TaxYearNotFound { year: 2019 };
/// assert_eq!(error.to_string(), "No tax table configured for year 2019");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No tax table is registered for the requested year.
    #[error("No tax table configured for year {year}")]
    TaxYearNotFound {
        /// The requested tax year.
        year: u16,
    },

    /// A shift was missing data required by its type, or fell outside the calendar.
    #[error("Invalid shift on {date}: {message}")]
    InvalidShift {
        /// The date of the invalid shift.
        date: NaiveDate,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A month index outside 0..=11.
    #[error("Invalid month index {month}: expected 0-11")]
    InvalidMonth {
        /// The offending month index.
        month: u32,
    },

    /// An amount grew past what a Decimal can hold.
    #[error("Amount out of range: {field}")]
    AmountOutOfRange {
        /// The quantity being computed.
        field: &'static str,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
