//! Annual income tax forecast.
//!
//! Extrapolates the year's gross from the months already earned (or a payslip's
//! year-to-date figure) plus a projected monthly gross for the rest of the year,
//! then taxes it against the annual bracket table.

use rust_decimal::Decimal;

use crate::config::{TaxTables, TaxYear};
use crate::error::{EngineError, EngineResult};
use crate::models::{MonthlyRecord, TaxForecast, YtdBaseline};

use super::income_tax::walk_brackets;
use super::rounding::round_money;

const MONTHS_PER_YEAR: u32 = 12;

impl YtdBaseline {
    /// Baseline from the latest month carrying a payslip year-to-date figure.
    ///
    /// Scans from December back to January and takes the first month with both
    /// a positive gross and a positive cumulative taxable gross. The month count
    /// is that month's position in the year.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::models::{MonthlyRecord, YtdBaseline};
    /// use rust_decimal::Decimal;
    ///
    /// let mut march = MonthlyRecord::empty(2);
    /// march.gross = Decimal::new(12000, 0);
    /// march.cumulative_gross_tax = Decimal::new(35000, 0);
    ///
    /// let baseline = YtdBaseline::from_records(&[march]).unwrap();
    /// assert_eq!(baseline.ytd_gross, Decimal::new(35000, 0));
    /// assert_eq!(baseline.months_with_data, 3);
    /// ```
    pub fn from_records(records: &[MonthlyRecord]) -> Option<Self> {
        records
            .iter()
            .filter(|r| r.month < MONTHS_PER_YEAR)
            .filter(|r| r.gross > Decimal::ZERO && r.cumulative_gross_tax > Decimal::ZERO)
            .max_by_key(|r| r.month)
            .map(|r| Self {
                ytd_gross: r.cumulative_gross_tax,
                months_with_data: r.month + 1,
            })
    }
}

/// Gross to assume for each month not yet earned.
///
/// The current month's gross when positive, otherwise the mean gross of the
/// months that have one, otherwise zero.
pub fn projected_monthly_gross(current_month_gross: Decimal, records: &[MonthlyRecord]) -> Decimal {
    if current_month_gross > Decimal::ZERO {
        return current_month_gross;
    }

    let earned: Vec<Decimal> = records
        .iter()
        .map(|r| r.gross)
        .filter(|g| *g > Decimal::ZERO)
        .collect();
    if earned.is_empty() {
        return Decimal::ZERO;
    }
    let count = Decimal::from(earned.len());
    match earned.iter().try_fold(Decimal::ZERO, |sum, g| sum.checked_add(*g)) {
        Some(sum) => sum / count,
        None => earned
            .iter()
            .fold(Decimal::ZERO, |sum, g| sum.saturating_add(*g / count)),
    }
}

/// Predicts the annual income tax.
///
/// With a positive `ytd` baseline, its figures replace the sum over `records`.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::predict_annual_tax;
/// use shift_payroll::config::{TaxTables, TaxYear};
/// use rust_decimal::Decimal;
///
/// // Nothing earned yet: twelve months at 15000
/// let forecast = predict_annual_tax(
///     &[],
///     Decimal::new(15000, 0),
///     Decimal::new(225, 2),
///     TaxYear::Y2026,
///     None,
///     &TaxTables::builtin(),
/// ).unwrap();
/// assert_eq!(forecast.estimated_annual_gross, Decimal::new(180000, 0));
/// assert_eq!(forecast.predicted_annual_tax, Decimal::new(18858, 0));
/// assert_eq!(forecast.months_with_data, 0);
/// ```
pub fn predict_annual_tax(
    records: &[MonthlyRecord],
    projected_monthly_gross: Decimal,
    credit_points: Decimal,
    year: TaxYear,
    ytd: Option<YtdBaseline>,
    tables: &TaxTables,
) -> EngineResult<TaxForecast> {
    let table = tables.table(year)?;

    let overflow = |field| EngineError::AmountOutOfRange { field };

    let (ytd_gross, months_with_data) = match ytd {
        Some(baseline) if baseline.ytd_gross > Decimal::ZERO => {
            (baseline.ytd_gross, baseline.months_with_data)
        }
        _ => records
            .iter()
            .filter(|r| r.gross > Decimal::ZERO)
            .try_fold((Decimal::ZERO, 0), |(sum, count), r| {
                Some((sum.checked_add(r.gross)?, count + 1))
            })
            .ok_or_else(|| overflow("year-to-date gross"))?,
    };

    let remaining_months = MONTHS_PER_YEAR.saturating_sub(months_with_data);
    let estimated = projected_monthly_gross
        .checked_mul(Decimal::from(remaining_months))
        .and_then(|projected| projected.checked_add(ytd_gross))
        .ok_or_else(|| overflow("estimated annual gross"))?;

    let (gross_tax, _) = walk_brackets(estimated, &table.annual_brackets());
    // Credits past any possible tax just zero it out
    let annual_credit = credit_points
        .saturating_mul(Decimal::from(MONTHS_PER_YEAR))
        .saturating_mul(table.credit_point_value);
    let predicted = (gross_tax - annual_credit).max(Decimal::ZERO);

    Ok(TaxForecast {
        estimated_annual_gross: round_money(estimated),
        predicted_annual_tax: round_money(predicted),
        months_with_data,
    })
}
