//! Pension, study fund and national/health insurance deductions.
//!
//! Insurance is charged in two tiers: reduced rates up to the lower ceiling,
//! full rates between the lower and upper ceilings, nothing above. Study fund
//! contributions are capped at the study ceiling unless the full-salary toggle
//! is set. Pension is uncapped.

use rust_decimal::Decimal;

use crate::config::{DeductionConstants, DeductionToggles, TaxTables};
use crate::error::EngineResult;
use crate::models::{DeductionResult, EmployeeDeductions, EmployerContributions};

use super::rounding::round_money;

/// Calculates monthly deductions, using the table selected by `toggles`.
///
/// Fails only when the selected tax year has no table in `tables`.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::calculate_deductions;
/// use shift_payroll::config::{DeductionToggles, TaxTables};
/// use rust_decimal::Decimal;
///
/// let result = calculate_deductions(
///     Decimal::new(10000, 0),
///     &DeductionToggles::default(),
///     &TaxTables::builtin(),
/// ).unwrap();
/// assert_eq!(result.employee.pension, Decimal::new(600, 0));
/// assert_eq!(result.employee.study, Decimal::new(250, 0));
/// ```
pub fn calculate_deductions(
    gross_monthly: Decimal,
    toggles: &DeductionToggles,
    tables: &TaxTables,
) -> EngineResult<DeductionResult> {
    let table = tables.table(toggles.tax_year())?;
    Ok(deductions_with_constants(gross_monthly, toggles, &table.deductions))
}

/// Calculates monthly deductions against explicit constants.
pub fn deductions_with_constants(
    gross_monthly: Decimal,
    toggles: &DeductionToggles,
    constants: &DeductionConstants,
) -> DeductionResult {
    let mut pension = Decimal::ZERO;
    let mut emp_pension = Decimal::ZERO;
    if toggles.pension {
        pension = gross_monthly * constants.pension_employee_rate;
        emp_pension = gross_monthly * constants.pension_employer_rate;
    }

    let mut study = Decimal::ZERO;
    let mut emp_study = Decimal::ZERO;
    if toggles.study {
        let base = if toggles.study_full_salary {
            gross_monthly
        } else {
            gross_monthly.min(constants.study_ceiling)
        };
        study = base * constants.study_employee_rate;
        emp_study = base * constants.study_employer_rate;
    }

    let mut ni_tier1 = Decimal::ZERO;
    let mut ni_tier2 = Decimal::ZERO;
    let mut health_tier1 = Decimal::ZERO;
    let mut health_tier2 = Decimal::ZERO;
    if toggles.ni {
        let lower_base = gross_monthly.min(constants.ni_lower_ceiling);
        let upper_base = (gross_monthly.min(constants.ni_upper_ceiling) - constants.ni_lower_ceiling)
            .max(Decimal::ZERO);

        ni_tier1 = lower_base * constants.ni_lower_rate;
        health_tier1 = lower_base * constants.health_lower_rate;
        ni_tier2 = upper_base * constants.ni_upper_rate;
        health_tier2 = upper_base * constants.health_upper_rate;
    }

    let national_insurance = ni_tier1 + ni_tier2;
    let health_insurance = health_tier1 + health_tier2;
    let ni = national_insurance + health_insurance;
    let employee_total = pension + study + ni;
    let employer_total = emp_pension + emp_study;

    DeductionResult {
        employee: EmployeeDeductions {
            pension: round_money(pension),
            study: round_money(study),
            ni: round_money(ni),
            national_insurance: round_money(national_insurance),
            health_insurance: round_money(health_insurance),
            ni_tier1: round_money(ni_tier1),
            ni_tier2: round_money(ni_tier2),
            health_tier1: round_money(health_tier1),
            health_tier2: round_money(health_tier2),
            total: round_money(employee_total),
        },
        employer: EmployerContributions {
            pension: round_money(emp_pension),
            study: round_money(emp_study),
            total: round_money(employer_total),
        },
        net: round_money(gross_monthly - employee_total),
    }
}
