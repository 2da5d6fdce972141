//! Calculation logic for the payroll engine.
//!
//! Every function here is a pure function of its inputs: shift pricing over
//! the rate windows, deductions, progressive income tax, the annual forecast,
//! and month and year aggregation. Statutory constants come in through
//! [`TaxTables`](crate::config::TaxTables); rates through
//! [`RateConfig`](crate::config::RateConfig).

mod annual_summary;
mod deductions;
mod forecast;
mod income_tax;
mod monthly;
mod payslip_comparison;
mod range_pay;
mod rate_model;
mod rounding;
mod shift_pay;

pub use annual_summary::calculate_annual_summary;
pub use deductions::{calculate_deductions, deductions_with_constants};
pub use forecast::{predict_annual_tax, projected_monthly_gross};
pub use income_tax::{calculate_income_tax, income_tax_with_table};
pub use monthly::{build_monthly_record, build_year_records, month_shift_gross, summarize_month};
pub use payslip_comparison::{MATCH_TOLERANCE, compare_payslip};
pub use range_pay::calculate_range_pay;
pub use rate_model::{REST_END_HOUR, RateInfo, WEEKEND_START_HOUR, is_rest, is_weekend, rate_at};
pub use rounding::{percentage, round_money};
pub use shift_pay::{MEAL_ALLOWANCE_PER_SIX_HOURS, calculate_shift_pay, meal_allowance, shift_interval};
