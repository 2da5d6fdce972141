//! Core data models for the payroll engine.
//!
//! This module contains the plain-data inputs and results exchanged with
//! the calculation functions.

mod deduction_result;
mod monthly_record;
mod pay_result;
mod shift;
mod summary;
mod tax_result;

pub use deduction_result::{DeductionResult, EmployeeDeductions, EmployerContributions};
pub use monthly_record::{MonthlyRecord, PayslipEntry, RecordSource};
pub use pay_result::{
    FlatRateResult, PayBreakdown, PayCategory, RangePay, RejectedShift, ShiftResult, TimedResult,
};
pub use shift::{Shift, ShiftType};
pub use summary::{
    AnnualSummary, ComparisonItem, ComparisonLine, ComparisonStatus, CumulativeSummary,
    MonthSummary, TypeTotals,
};
pub use tax_result::{TaxForecast, TaxResult, TaxTier, YtdBaseline};
