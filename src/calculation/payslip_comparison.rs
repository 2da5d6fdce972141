//! Comparing the month estimate with an actual payslip.

use rust_decimal::Decimal;

use crate::models::{ComparisonItem, ComparisonLine, ComparisonStatus, MonthSummary, PayslipEntry};

use super::rounding::round_money;

/// Differences under this amount count as a match.
pub const MATCH_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

fn line(item: ComparisonItem, estimated: Decimal, actual: Decimal) -> ComparisonLine {
    let difference = round_money(actual - estimated);
    let status = if difference.abs() < MATCH_TOLERANCE {
        ComparisonStatus::Match
    } else if difference > Decimal::ZERO {
        ComparisonStatus::Higher
    } else {
        ComparisonStatus::Lower
    };
    ComparisonLine {
        item,
        estimated,
        actual,
        difference,
        status,
    }
}

/// Lines up the estimate against the payslip, gross first and net last.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::{compare_payslip, summarize_month};
/// use shift_payroll::config::{PayrollProfile, TaxTables};
/// use shift_payroll::models::{ComparisonStatus, PayslipEntry};
///
/// let estimate = summarize_month(&[], &PayrollProfile::default(), &TaxTables::builtin()).unwrap();
/// let lines = compare_payslip(&estimate, &PayslipEntry::default());
/// assert_eq!(lines.len(), 7);
/// assert!(lines.iter().all(|l| l.status == ComparisonStatus::Match));
/// ```
pub fn compare_payslip(estimate: &MonthSummary, payslip: &PayslipEntry) -> Vec<ComparisonLine> {
    let employee = &estimate.deductions.employee;
    vec![
        line(ComparisonItem::Gross, estimate.gross, payslip.gross),
        line(ComparisonItem::IncomeTax, estimate.income_tax, payslip.income_tax),
        line(
            ComparisonItem::NationalInsurance,
            employee.national_insurance,
            payslip.national_insurance,
        ),
        line(
            ComparisonItem::HealthInsurance,
            employee.health_insurance,
            payslip.health_insurance,
        ),
        line(ComparisonItem::Pension, employee.pension, payslip.pension),
        line(ComparisonItem::Study, employee.study, payslip.study),
        line(ComparisonItem::Net, estimate.net, payslip.actual_net),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{calculate_shift_pay, summarize_month};
    use crate::config::{PayrollProfile, TaxTables};
    use crate::models::{Shift, ShiftType};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn estimate() -> MonthSummary {
        let profile = PayrollProfile::default();
        let results: Vec<_> = (2..=13)
            .map(|d| {
                let shift = Shift::new(ShiftType::Training, NaiveDate::from_ymd_opt(2026, 3, d).unwrap());
                calculate_shift_pay(&shift, &profile.rates)
            })
            .collect();
        summarize_month(&results, &profile, &TaxTables::builtin()).unwrap()
    }

    #[test]
    fn test_statuses() {
        let estimate = estimate();
        let payslip = PayslipEntry {
            gross: estimate.gross + dec("0.3"),
            income_tax: estimate.income_tax + dec("12"),
            pension: estimate.deductions.employee.pension - dec("5"),
            ..PayslipEntry::default()
        };
        let lines = compare_payslip(&estimate, &payslip);

        assert_eq!(lines[0].item, ComparisonItem::Gross);
        assert_eq!(lines[0].status, ComparisonStatus::Match);
        assert_eq!(lines[0].difference, dec("0.3"));

        assert_eq!(lines[1].status, ComparisonStatus::Higher);
        assert_eq!(lines[1].difference, dec("12"));

        assert_eq!(lines[4].item, ComparisonItem::Pension);
        assert_eq!(lines[4].status, ComparisonStatus::Lower);
        assert_eq!(lines[4].difference, dec("-5"));

        assert_eq!(lines[6].item, ComparisonItem::Net);
        assert_eq!(lines[6].actual, Decimal::ZERO);
        assert_eq!(lines[6].status, ComparisonStatus::Lower);
    }

    #[test]
    fn test_half_unit_is_not_a_match() {
        let l = line(ComparisonItem::Study, dec("100"), dec("100.5"));
        assert_eq!(l.status, ComparisonStatus::Higher);
    }
}
