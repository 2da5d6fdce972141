//! Monthly records and payslip entries.
//!
//! A [`MonthlyRecord`] is one month of a tax year as fed to the annual
//! aggregation: either derived from shifts, copied from a payslip the user
//! entered, or empty.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a month's figures came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// Derived from the month's shifts.
    Auto,
    /// Copied from an entered payslip.
    Manual,
    /// No data for the month.
    #[default]
    Empty,
}

/// One month of figures for the annual aggregation.
///
/// Absent amounts deserialize as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyRecord {
    /// Month index, 0 for January through 11 for December.
    pub month: u32,
    /// Gross pay.
    pub gross: Decimal,
    /// Income tax withheld.
    pub income_tax: Decimal,
    /// National and health insurance withheld.
    pub ni: Decimal,
    /// Employee pension.
    pub pension: Decimal,
    /// Employee study fund.
    pub study: Decimal,
    /// Employer pension.
    pub emp_pension: Decimal,
    /// Employer study fund.
    pub emp_study: Decimal,
    /// Origin of the figures.
    pub source: RecordSource,
    /// Cumulative taxable gross printed on the month's payslip.
    pub cumulative_gross_tax: Decimal,
    /// Cumulative study-fund gross printed on the month's payslip.
    pub cumulative_gross_study: Decimal,
}

impl MonthlyRecord {
    /// An empty record for `month`.
    pub fn empty(month: u32) -> Self {
        Self {
            month,
            ..Self::default()
        }
    }
}

/// Figures copied from an actual payslip.
///
/// Every field is optional on input and defaults to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayslipEntry {
    /// Gross pay.
    pub gross: Decimal,
    /// Net pay actually received.
    pub actual_net: Decimal,
    /// Income tax withheld.
    pub income_tax: Decimal,
    /// National insurance withheld.
    pub national_insurance: Decimal,
    /// Health insurance withheld.
    pub health_insurance: Decimal,
    /// Employee pension.
    pub pension: Decimal,
    /// Employee study fund.
    pub study: Decimal,
    /// Employer pension.
    pub emp_pension: Decimal,
    /// Employer study fund.
    pub emp_study: Decimal,
    /// Cumulative taxable gross for the year.
    pub cumulative_gross_tax: Decimal,
    /// Cumulative study-fund gross for the year.
    pub cumulative_gross_study: Decimal,
}

impl PayslipEntry {
    /// National plus health insurance.
    pub fn ni(&self) -> Decimal {
        self.national_insurance + self.health_insurance
    }

    /// Returns true when the entry carries enough to replace shift-derived figures.
    pub fn has_data(&self) -> bool {
        self.gross > Decimal::ZERO || self.income_tax > Decimal::ZERO || self.ni() > Decimal::ZERO
    }
}
