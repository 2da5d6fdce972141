//! Progressive income tax.
//!
//! Income is walked through the bracket table from the bottom: each bracket
//! taxes the slice between the previous ceiling and its own, until the income
//! is used up. Credit points are then subtracted, floored at zero.

use rust_decimal::Decimal;

use crate::config::{TaxBracket, TaxTables, TaxYear, TaxYearTable};
use crate::error::EngineResult;
use crate::models::{TaxResult, TaxTier};

use super::rounding::{percentage, round_money};

/// Unrounded tax and the touched tiers for `income` over `brackets`.
///
/// Brackets must be in ascending order with an open last bracket, which
/// [`TaxYearTable::validate`] checks for loaded tables. Tier amounts are
/// rounded to cents; the returned total is not.
pub(crate) fn walk_brackets(income: Decimal, brackets: &[TaxBracket]) -> (Decimal, Vec<TaxTier>) {
    let mut remaining = income;
    let mut prev = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    let mut tiers = Vec::new();

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }
        let width = match bracket.ceiling {
            Some(ceiling) => remaining.min(ceiling - prev),
            None => remaining,
        };
        let tax = width * bracket.rate;

        tiers.push(TaxTier {
            from: prev,
            to: prev + width,
            rate: bracket.rate,
            taxable: round_money(width),
            tax: round_money(tax),
        });

        total += tax;
        remaining -= width;
        match bracket.ceiling {
            Some(ceiling) => prev = ceiling,
            None => break,
        }
    }

    (total, tiers)
}

/// Calculates monthly income tax for the given tax year.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::calculate_income_tax;
/// use shift_payroll::config::{TaxTables, TaxYear};
/// use rust_decimal::Decimal;
///
/// let result = calculate_income_tax(
///     Decimal::new(15000, 0),
///     Decimal::new(225, 2),
///     TaxYear::Y2026,
///     &TaxTables::builtin(),
/// ).unwrap();
/// assert_eq!(result.gross_tax, Decimal::new(2116, 0));
/// assert_eq!(result.credit_amount, Decimal::new(5445, 1));
/// assert_eq!(result.final_tax, Decimal::new(15715, 1));
/// ```
pub fn calculate_income_tax(
    monthly_gross: Decimal,
    credit_points: Decimal,
    year: TaxYear,
    tables: &TaxTables,
) -> EngineResult<TaxResult> {
    let table = tables.table(year)?;
    Ok(income_tax_with_table(monthly_gross, credit_points, table))
}

/// Calculates monthly income tax against an explicit table.
pub fn income_tax_with_table(monthly_gross: Decimal, credit_points: Decimal, table: &TaxYearTable) -> TaxResult {
    let (gross_tax, tiers) = walk_brackets(monthly_gross, &table.monthly_brackets);
    let credit_amount = credit_points.saturating_mul(table.credit_point_value);
    let final_tax = (gross_tax - credit_amount).max(Decimal::ZERO);

    TaxResult {
        gross_tax: round_money(gross_tax),
        credit_amount: round_money(credit_amount),
        final_tax: round_money(final_tax),
        effective_rate: percentage(final_tax, monthly_gross),
        tiers,
    }
}
