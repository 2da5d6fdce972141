//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places, halves away from zero.
///
/// Applied only to final output fields; intermediate accruals stay unrounded.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(28125, 3)), Decimal::new(2813, 2));
/// assert_eq!(round_money(Decimal::new(-28125, 3)), Decimal::new(-2813, 2));
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `numerator / denominator * 100` rounded to cents, or zero when the denominator is not positive.
pub fn percentage(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_money(numerator / denominator * Decimal::ONE_HUNDRED)
}
