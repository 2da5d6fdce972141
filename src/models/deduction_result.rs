//! Deduction result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amounts withheld from the employee's gross.
///
/// `ni` is national plus health insurance; `total` is pension + study + ni.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDeductions {
    /// Employee pension contribution.
    pub pension: Decimal,
    /// Employee study fund contribution.
    pub study: Decimal,
    /// National and health insurance combined.
    pub ni: Decimal,
    /// National insurance across both tiers.
    pub national_insurance: Decimal,
    /// Health insurance across both tiers.
    pub health_insurance: Decimal,
    /// National insurance on income up to the lower ceiling.
    pub ni_tier1: Decimal,
    /// National insurance on income between the ceilings.
    pub ni_tier2: Decimal,
    /// Health insurance on income up to the lower ceiling.
    pub health_tier1: Decimal,
    /// Health insurance on income between the ceilings.
    pub health_tier2: Decimal,
    /// Everything withheld.
    pub total: Decimal,
}

/// Contributions the employer pays on top of the gross.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Employer pension contribution.
    pub pension: Decimal,
    /// Employer study fund contribution.
    pub study: Decimal,
    /// Sum of employer contributions.
    pub total: Decimal,
}

/// Monthly deductions for one gross figure.
///
/// # Example
///
/// ```
/// use shift_payroll::models::DeductionResult;
/// use rust_decimal::Decimal;
///
/// let result = DeductionResult::default();
/// assert_eq!(result.net, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// Employee-side deductions.
    pub employee: EmployeeDeductions,
    /// Employer-side contributions.
    pub employer: EmployerContributions,
    /// Gross minus employee deductions (before income tax).
    pub net: Decimal,
}
