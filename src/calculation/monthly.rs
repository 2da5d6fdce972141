//! Month-level aggregation.
//!
//! Turns a month of priced shifts into a [`MonthSummary`], and builds the
//! [`MonthlyRecord`]s the annual aggregation consumes, preferring figures from
//! an entered payslip over shift-derived ones.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::config::{DeductionToggles, FixedAdditions, PayrollProfile, TaxTables};
use crate::error::{EngineError, EngineResult};
use crate::models::{MonthSummary, MonthlyRecord, PayslipEntry, RecordSource, ShiftResult, TypeTotals};

use super::deductions::calculate_deductions;
use super::income_tax::calculate_income_tax;
use super::rounding::{percentage, round_money};

/// Gross pay for a month: shift pay plus the fixed additions when any shift was priced.
pub fn month_shift_gross(results: &[ShiftResult], additions: &FixedAdditions) -> Decimal {
    if results.iter().all(ShiftResult::is_error) {
        return Decimal::ZERO;
    }
    let shift_pay: Decimal = results.iter().map(ShiftResult::total_pay).sum();
    round_money(shift_pay + additions.total())
}

/// Summarizes one month of priced shifts.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::{calculate_shift_pay, summarize_month};
/// use shift_payroll::config::{PayrollProfile, TaxTables};
/// use shift_payroll::models::{Shift, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let profile = PayrollProfile::default();
/// let day = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
/// let results = vec![calculate_shift_pay(&Shift::new(ShiftType::Vacation, day), &profile.rates)];
///
/// let summary = summarize_month(&results, &profile, &TaxTables::builtin()).unwrap();
/// // 1750 vacation day + 509.68 fixed additions
/// assert_eq!(summary.gross, Decimal::new(225968, 2));
/// assert_eq!(summary.shift_count, 1);
/// ```
pub fn summarize_month(
    results: &[ShiftResult],
    profile: &PayrollProfile,
    tables: &TaxTables,
) -> EngineResult<MonthSummary> {
    let mut total_hours = Decimal::ZERO;
    let mut shift_pay = Decimal::ZERO;
    let mut meal_allowance = Decimal::ZERO;
    let mut per_type: BTreeMap<_, TypeTotals> = BTreeMap::new();
    let mut shift_count: u32 = 0;

    for result in results.iter().filter(|r| !r.is_error()) {
        shift_count += 1;
        total_hours += result.total_hours();
        shift_pay += result.total_pay();
        meal_allowance += result.meal_allowance();

        let totals = per_type.entry(result.shift_type()).or_default();
        totals.count += 1;
        totals.pay += result.total_pay();
    }

    let fixed_additions = if shift_count == 0 {
        Decimal::ZERO
    } else {
        profile.fixed_additions.total()
    };
    let gross = round_money(shift_pay + fixed_additions);

    let deductions = calculate_deductions(gross, &profile.toggles, tables)?;
    let income_tax = monthly_income_tax(gross, &profile.toggles, profile.credit_points, tables)?;
    let total_deductions = round_money(deductions.employee.total + income_tax);
    let net = round_money(gross - total_deductions);

    let average_pay_per_shift = if shift_count == 0 {
        Decimal::ZERO
    } else {
        round_money(shift_pay / Decimal::from(shift_count))
    };

    Ok(MonthSummary {
        shift_count,
        total_hours: round_money(total_hours),
        shift_pay: round_money(shift_pay),
        meal_allowance: round_money(meal_allowance),
        fixed_additions,
        gross,
        deductions,
        income_tax,
        total_deductions,
        net,
        net_percent: percentage(net, gross),
        average_pay_per_shift,
        per_type: per_type
            .into_iter()
            .map(|(t, totals)| {
                (
                    t,
                    TypeTotals {
                        pay: round_money(totals.pay),
                        ..totals
                    },
                )
            })
            .collect(),
    })
}

/// Final income tax for the month, or zero when withholding is toggled off.
fn monthly_income_tax(
    gross: Decimal,
    toggles: &DeductionToggles,
    credit_points: Decimal,
    tables: &TaxTables,
) -> EngineResult<Decimal> {
    if !toggles.income_tax {
        return Ok(Decimal::ZERO);
    }
    Ok(calculate_income_tax(gross, credit_points, toggles.tax_year(), tables)?.final_tax)
}

/// Builds the record for month index `month` (0-11).
///
/// A payslip with data wins and is copied as entered. Otherwise a positive
/// shift gross produces an auto record with deductions and income tax derived
/// from it. Otherwise the month is empty. Payslip cumulative figures are carried
/// over in every case.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when `month` is above 11, or
/// [`EngineError::TaxYearNotFound`] when an auto month needs a missing table.
pub fn build_monthly_record(
    month: u32,
    shift_gross: Decimal,
    payslip: Option<&PayslipEntry>,
    toggles: &DeductionToggles,
    credit_points: Decimal,
    tables: &TaxTables,
) -> EngineResult<MonthlyRecord> {
    if month > 11 {
        return Err(EngineError::InvalidMonth { month });
    }

    let (cumulative_gross_tax, cumulative_gross_study) = payslip
        .map(|p| (p.cumulative_gross_tax, p.cumulative_gross_study))
        .unwrap_or_default();

    if let Some(slip) = payslip.filter(|p| p.has_data()) {
        return Ok(MonthlyRecord {
            month,
            gross: slip.gross,
            income_tax: slip.income_tax,
            ni: slip.ni(),
            pension: slip.pension,
            study: slip.study,
            emp_pension: slip.emp_pension,
            emp_study: slip.emp_study,
            source: RecordSource::Manual,
            cumulative_gross_tax,
            cumulative_gross_study,
        });
    }

    if shift_gross <= Decimal::ZERO {
        return Ok(MonthlyRecord {
            cumulative_gross_tax,
            cumulative_gross_study,
            ..MonthlyRecord::empty(month)
        });
    }

    let deductions = calculate_deductions(shift_gross, toggles, tables)?;
    Ok(MonthlyRecord {
        month,
        gross: shift_gross,
        income_tax: monthly_income_tax(shift_gross, toggles, credit_points, tables)?,
        ni: deductions.employee.ni,
        pension: deductions.employee.pension,
        study: deductions.employee.study,
        emp_pension: deductions.employer.pension,
        emp_study: deductions.employer.study,
        source: RecordSource::Auto,
        cumulative_gross_tax,
        cumulative_gross_study,
    })
}

/// Builds all twelve records of a year.
///
/// `shift_gross[m]` and `payslips[m]` feed month `m`; missing entries count as
/// zero gross and no payslip.
pub fn build_year_records(
    shift_gross: &[Decimal],
    payslips: &[Option<PayslipEntry>],
    toggles: &DeductionToggles,
    credit_points: Decimal,
    tables: &TaxTables,
) -> EngineResult<Vec<MonthlyRecord>> {
    (0..12u32)
        .map(|month| {
            let index = month as usize;
            let gross = shift_gross.get(index).copied().unwrap_or_default();
            let payslip = payslips.get(index).and_then(Option::as_ref);
            build_monthly_record(month, gross, payslip, toggles, credit_points, tables)
        })
        .collect()
}

impl PayslipEntry {
    /// Completes a partially entered payslip from its gross.
    ///
    /// Fields already entered (non-zero) are kept. Income tax is filled only
    /// when withholding is toggled on. Net is filled as gross minus income tax
    /// and employee deductions. A non-positive gross leaves the entry untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::config::{DeductionToggles, TaxTables};
    /// use shift_payroll::models::PayslipEntry;
    /// use rust_decimal::Decimal;
    ///
    /// let mut slip = PayslipEntry { gross: Decimal::new(10000, 0), ..PayslipEntry::default() };
    /// slip.fill_missing_from_gross(&DeductionToggles::default(), Decimal::new(225, 2), &TaxTables::builtin())
    ///     .unwrap();
    /// assert_eq!(slip.pension, Decimal::new(600, 0));
    /// assert_eq!(slip.health_insurance, Decimal::new(35364, 2));
    /// ```
    pub fn fill_missing_from_gross(
        &mut self,
        toggles: &DeductionToggles,
        credit_points: Decimal,
        tables: &TaxTables,
    ) -> EngineResult<()> {
        if self.gross <= Decimal::ZERO {
            return Ok(());
        }

        let deductions = calculate_deductions(self.gross, toggles, tables)?;
        let income_tax = monthly_income_tax(self.gross, toggles, credit_points, tables)?;

        let fill = |field: &mut Decimal, value: Decimal| {
            if field.is_zero() {
                *field = value;
            }
        };
        fill(&mut self.income_tax, income_tax);
        fill(&mut self.national_insurance, deductions.employee.national_insurance);
        fill(&mut self.health_insurance, deductions.employee.health_insurance);
        fill(&mut self.pension, deductions.employee.pension);
        fill(&mut self.study, deductions.employee.study);
        fill(&mut self.emp_pension, deductions.employer.pension);
        fill(&mut self.emp_study, deductions.employer.study);
        fill(
            &mut self.actual_net,
            round_money(self.gross - income_tax - deductions.employee.total),
        );
        Ok(())
    }
}
