//! Request types for the payroll API.
//!
//! Requests carry plain data. Rate settings arrive as per-field overrides and
//! are merged over the defaults before anything is calculated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{DeductionToggles, FixedAdditions, PayrollProfile, RateConfig, RateOverrides, TaxYear};
use crate::models::{MonthlyRecord, PayslipEntry, Shift, YtdBaseline};

fn default_credit_points() -> Decimal {
    Decimal::new(225, 2)
}

/// Employee settings in a request.
///
/// Every field is optional; absent rates fall back to the defaults field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    /// Rate overrides.
    #[serde(default)]
    pub rates: RateOverrides,
    /// Income tax credit points.
    #[serde(default = "default_credit_points")]
    pub credit_points: Decimal,
    /// Which deductions apply.
    #[serde(default)]
    pub toggles: DeductionToggles,
    /// Fixed monthly additions.
    #[serde(default)]
    pub fixed_additions: FixedAdditions,
}

impl Default for ProfileRequest {
    fn default() -> Self {
        Self {
            rates: RateOverrides::default(),
            credit_points: default_credit_points(),
            toggles: DeductionToggles::default(),
            fixed_additions: FixedAdditions::default(),
        }
    }
}

impl From<ProfileRequest> for PayrollProfile {
    fn from(req: ProfileRequest) -> Self {
        PayrollProfile {
            rates: RateConfig::from_overrides(&req.rates),
            credit_points: req.credit_points,
            toggles: req.toggles,
            fixed_additions: req.fixed_additions,
        }
    }
}

/// Request body for `POST /shift-pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPayRequest {
    /// Shifts to price.
    pub shifts: Vec<Shift>,
    /// Rate overrides.
    #[serde(default)]
    pub rates: RateOverrides,
}

/// Request body for `POST /deductions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionsRequest {
    /// Monthly gross.
    pub gross: Decimal,
    /// Which deductions apply; all on for 2026 when absent.
    #[serde(default)]
    pub toggles: DeductionToggles,
}

/// Request body for `POST /income-tax`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxRequest {
    /// Monthly gross.
    pub gross: Decimal,
    /// Income tax credit points.
    #[serde(default = "default_credit_points")]
    pub credit_points: Decimal,
    /// Tax year; takes precedence over `use_2025`.
    #[serde(default)]
    pub tax_year: Option<TaxYear>,
    /// Use the 2025 tables when no year is given.
    #[serde(default)]
    pub use_2025: bool,
}

impl IncomeTaxRequest {
    /// The tax year the request selects.
    pub fn year(&self) -> TaxYear {
        self.tax_year.unwrap_or(TaxYear::from_flag(self.use_2025))
    }
}

/// Request body for `POST /forecast`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Months of the year so far.
    #[serde(default)]
    pub records: Vec<MonthlyRecord>,
    /// Gross to assume for each remaining month.
    ///
    /// Derived from `current_month_gross` and `records` when absent.
    #[serde(default)]
    pub projected_monthly_gross: Option<Decimal>,
    /// Gross of the month in progress.
    #[serde(default)]
    pub current_month_gross: Decimal,
    /// Income tax credit points.
    #[serde(default = "default_credit_points")]
    pub credit_points: Decimal,
    /// Tax year.
    #[serde(default)]
    pub tax_year: TaxYear,
    /// Payslip year-to-date baseline.
    ///
    /// Taken from the latest record with a cumulative figure when absent.
    #[serde(default)]
    pub ytd: Option<YtdBaseline>,
}

/// One month of input for `POST /annual-summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthInput {
    /// The month's shifts.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// The month's payslip, if one was entered.
    #[serde(default)]
    pub payslip: Option<PayslipEntry>,
}

/// Request body for `POST /annual-summary`.
///
/// Either ready-made `records`, or up to twelve `months` of shifts and payslips
/// from which the records are built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnualSummaryRequest {
    /// Ready-made monthly records.
    #[serde(default)]
    pub records: Vec<MonthlyRecord>,
    /// Raw month inputs, January first.
    #[serde(default)]
    pub months: Vec<MonthInput>,
    /// Employee settings used to price and derive the months.
    #[serde(default)]
    pub profile: ProfileRequest,
}

/// Request body for `POST /month-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummaryRequest {
    /// The month's shifts.
    pub shifts: Vec<Shift>,
    /// Employee settings.
    #[serde(default)]
    pub profile: ProfileRequest,
    /// An actual payslip to compare the estimate against.
    #[serde(default)]
    pub payslip: Option<PayslipEntry>,
}
