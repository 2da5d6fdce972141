//! Income tax result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The slice of income taxed inside one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTier {
    /// Lower bound of the slice.
    pub from: Decimal,
    /// Upper bound of the slice.
    pub to: Decimal,
    /// Marginal rate of the bracket.
    pub rate: Decimal,
    /// Income taxed in this bracket, rounded to cents.
    pub taxable: Decimal,
    /// Tax due in this bracket, rounded to cents.
    pub tax: Decimal,
}

/// Progressive income tax on a monthly gross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Tax before credits.
    pub gross_tax: Decimal,
    /// Credit points times the point value.
    pub credit_amount: Decimal,
    /// `max(0, gross_tax - credit_amount)`.
    pub final_tax: Decimal,
    /// Final tax as a percentage of gross; zero when gross is zero.
    pub effective_rate: Decimal,
    /// Touched brackets in ascending order.
    pub tiers: Vec<TaxTier>,
}

/// Year-to-date figures taken from an actual payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YtdBaseline {
    /// Cumulative taxable gross so far this year.
    pub ytd_gross: Decimal,
    /// Number of months the cumulative figure covers.
    pub months_with_data: u32,
}

/// Estimated annual gross and income tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxForecast {
    /// Year-to-date gross plus the projection for the remaining months.
    pub estimated_annual_gross: Decimal,
    /// Annual tax on the estimate after annual credits.
    pub predicted_annual_tax: Decimal,
    /// Months counted as already earned.
    pub months_with_data: u32,
}
