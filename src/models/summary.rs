//! Aggregate result models: month and year summaries and payslip comparison.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DeductionResult, MonthlyRecord, ShiftType};

/// Count and pay for one shift type within a month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTotals {
    /// Number of shifts of this type.
    pub count: u32,
    /// Their combined pay.
    pub pay: Decimal,
}

/// Everything the month view needs about one month of shifts.
///
/// Rejected shifts are left out of every figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Number of priced shifts.
    pub shift_count: u32,
    /// Billed hours across timed shifts.
    pub total_hours: Decimal,
    /// Sum of shift pay.
    pub shift_pay: Decimal,
    /// Meal allowance already included in `shift_pay`.
    pub meal_allowance: Decimal,
    /// Fixed monthly additions; zero for a month without shifts.
    pub fixed_additions: Decimal,
    /// `shift_pay + fixed_additions`.
    pub gross: Decimal,
    /// Deductions on `gross`.
    pub deductions: DeductionResult,
    /// Income tax on `gross`; zero when income tax is toggled off.
    pub income_tax: Decimal,
    /// Employee deductions plus income tax.
    pub total_deductions: Decimal,
    /// `gross - total_deductions`.
    pub net: Decimal,
    /// Net as a percentage of gross; zero when gross is zero.
    pub net_percent: Decimal,
    /// Mean pay per shift; zero without shifts.
    pub average_pay_per_shift: Decimal,
    /// Count and pay per shift type.
    pub per_type: BTreeMap<ShiftType, TypeTotals>,
}

/// Year figures computed from entered payslips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeSummary {
    /// Number of manual months.
    pub manual_months: u32,
    /// Mean gross over manual months.
    pub average_manual_gross: Decimal,
    /// Cumulative taxable gross from the latest payslip, or the running sum.
    pub cumulative_tax_base: Decimal,
    /// Cumulative study-fund gross from the latest payslip, or the running sum.
    pub cumulative_study_base: Decimal,
}

/// Yearly totals over twelve monthly records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualSummary {
    /// Sum of gross.
    pub total_gross: Decimal,
    /// Sum of income tax.
    pub total_income_tax: Decimal,
    /// Sum of national and health insurance.
    pub total_ni: Decimal,
    /// Sum of employee pension.
    pub total_pension: Decimal,
    /// Sum of employee study fund.
    pub total_study: Decimal,
    /// Income tax + insurance + pension + study.
    pub total_deductions: Decimal,
    /// `total_gross - total_deductions`.
    pub total_net: Decimal,
    /// Sum of employer pension.
    pub total_emp_pension: Decimal,
    /// Sum of employer study fund.
    pub total_emp_study: Decimal,
    /// Employer pension plus employer study fund.
    pub total_emp_contributions: Decimal,
    /// Months whose source is not empty.
    pub reported_months: u32,
    /// Income tax as a percentage of gross; zero when gross is zero.
    pub effective_tax_rate: Decimal,
    /// Present when at least one month came from a payslip.
    pub cumulative: Option<CumulativeSummary>,
    /// The records the totals were computed from.
    pub months: Vec<MonthlyRecord>,
}

/// A compared payslip line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonItem {
    /// Gross pay.
    Gross,
    /// Income tax.
    IncomeTax,
    /// National insurance.
    NationalInsurance,
    /// Health insurance.
    HealthInsurance,
    /// Employee pension.
    Pension,
    /// Employee study fund.
    Study,
    /// Net pay.
    Net,
}

/// How the actual figure relates to the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonStatus {
    /// Within half a unit of currency.
    Match,
    /// The payslip shows more than estimated.
    Higher,
    /// The payslip shows less than estimated.
    Lower,
}

/// Estimated versus actual for one payslip line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonLine {
    /// Which line.
    pub item: ComparisonItem,
    /// The engine's figure.
    pub estimated: Decimal,
    /// The payslip's figure.
    pub actual: Decimal,
    /// `actual - estimated`.
    pub difference: Decimal,
    /// Classification of the difference.
    pub status: ComparisonStatus,
}
