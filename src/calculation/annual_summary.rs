//! Yearly totals over monthly records.
//!
//! Pure summation: records arrive with their derived figures already filled in
//! (see [`build_monthly_record`](super::build_monthly_record)).

use rust_decimal::Decimal;

use crate::models::{AnnualSummary, CumulativeSummary, MonthlyRecord, RecordSource};

use super::rounding::{percentage, round_money};

#[derive(Default)]
struct Totals {
    gross: Decimal,
    income_tax: Decimal,
    ni: Decimal,
    pension: Decimal,
    study: Decimal,
    emp_pension: Decimal,
    emp_study: Decimal,
}

impl Totals {
    fn add(mut self, record: &MonthlyRecord) -> Self {
        self.gross += record.gross;
        self.income_tax += record.income_tax;
        self.ni += record.ni;
        self.pension += record.pension;
        self.study += record.study;
        self.emp_pension += record.emp_pension;
        self.emp_study += record.emp_study;
        self
    }
}

/// Sums the records into yearly totals.
///
/// Empty months contribute zeros to the sums and are not counted as reported.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::calculate_annual_summary;
/// use shift_payroll::models::{MonthlyRecord, RecordSource};
/// use rust_decimal::Decimal;
///
/// let mut january = MonthlyRecord::empty(0);
/// january.gross = Decimal::new(10000, 0);
/// january.income_tax = Decimal::new(500, 0);
/// january.source = RecordSource::Auto;
///
/// let summary = calculate_annual_summary(&[january, MonthlyRecord::empty(1)]);
/// assert_eq!(summary.total_net, Decimal::new(9500, 0));
/// assert_eq!(summary.reported_months, 1);
/// ```
pub fn calculate_annual_summary(records: &[MonthlyRecord]) -> AnnualSummary {
    let totals = records.iter().fold(Totals::default(), Totals::add);
    let total_deductions = totals.income_tax + totals.ni + totals.pension + totals.study;
    let reported_months = records
        .iter()
        .filter(|r| r.source != RecordSource::Empty)
        .count() as u32;

    AnnualSummary {
        total_gross: round_money(totals.gross),
        total_income_tax: round_money(totals.income_tax),
        total_ni: round_money(totals.ni),
        total_pension: round_money(totals.pension),
        total_study: round_money(totals.study),
        total_deductions: round_money(total_deductions),
        total_net: round_money(totals.gross - total_deductions),
        total_emp_pension: round_money(totals.emp_pension),
        total_emp_study: round_money(totals.emp_study),
        total_emp_contributions: round_money(totals.emp_pension + totals.emp_study),
        reported_months,
        effective_tax_rate: percentage(totals.income_tax, totals.gross),
        cumulative: cumulative_summary(records),
        months: records.to_vec(),
    }
}

/// Payslip-based year figures; `None` without manual months.
fn cumulative_summary(records: &[MonthlyRecord]) -> Option<CumulativeSummary> {
    let manual: Vec<&MonthlyRecord> = records
        .iter()
        .filter(|r| r.source == RecordSource::Manual)
        .collect();
    if manual.is_empty() {
        return None;
    }

    let manual_gross: Decimal = manual.iter().map(|r| r.gross).sum();
    let average = manual_gross / Decimal::from(manual.len());

    let latest = manual
        .iter()
        .filter(|r| r.gross > Decimal::ZERO)
        .max_by_key(|r| r.month);
    let through_month = latest.map_or(u32::MAX, |r| r.month);
    let running_gross: Decimal = manual
        .iter()
        .filter(|r| r.month <= through_month)
        .map(|r| r.gross)
        .sum();

    let or_running = |value: Decimal| {
        if value > Decimal::ZERO {
            value
        } else {
            running_gross
        }
    };
    let tax_base = or_running(latest.map_or(Decimal::ZERO, |r| r.cumulative_gross_tax));
    let study_base = or_running(latest.map_or(Decimal::ZERO, |r| r.cumulative_gross_study));

    Some(CumulativeSummary {
        manual_months: manual.len() as u32,
        average_manual_gross: round_money(average),
        cumulative_tax_base: round_money(tax_base),
        cumulative_study_base: round_money(study_base),
    })
}
