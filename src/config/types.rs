//! Configuration types for payroll calculation.
//!
//! Rate settings are caller-owned values threaded into every calculation.
//! Statutory constants are versioned data: one [`TaxYearTable`] per year,
//! collected in a [`TaxTables`] registry.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Hourly and flat rates used to price shifts.
///
/// # Example
///
/// ```
/// use shift_payroll::config::RateConfig;
/// use rust_decimal::Decimal;
///
/// let rates = RateConfig::default();
/// assert_eq!(rates.base_rate, Decimal::new(75, 0));
/// assert_eq!(rates.weekend_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Base hourly rate.
    pub base_rate: Decimal,
    /// Multiplier applied inside the weekend window.
    pub weekend_multiplier: Decimal,
    /// Multiplier applied inside the nightly rest window.
    pub rest_multiplier: Decimal,
    /// Flat pay for a vacation or sick day.
    pub vacation_day_rate: Decimal,
    /// Bonus added to a shift flagged with `has_bonus`.
    pub bonus_quarterly: Decimal,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            base_rate: Decimal::new(75, 0),
            weekend_multiplier: Decimal::new(15, 1),
            rest_multiplier: Decimal::new(5, 1),
            vacation_day_rate: Decimal::new(1750, 0),
            bonus_quarterly: Decimal::new(3500, 0),
        }
    }
}

impl RateConfig {
    /// Returns a copy of `self` with every field present in `overrides` replaced.
    ///
    /// Merging is per field: an override never replaces the whole config.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::config::{RateConfig, RateOverrides};
    /// use rust_decimal::Decimal;
    ///
    /// let overrides = RateOverrides {
    ///     base_rate: Some(Decimal::new(80, 0)),
    ///     ..RateOverrides::default()
    /// };
    /// let rates = RateConfig::default().with_overrides(&overrides);
    /// assert_eq!(rates.base_rate, Decimal::new(80, 0));
    /// assert_eq!(rates.vacation_day_rate, Decimal::new(1750, 0));
    /// ```
    pub fn with_overrides(&self, overrides: &RateOverrides) -> Self {
        Self {
            base_rate: overrides.base_rate.unwrap_or(self.base_rate),
            weekend_multiplier: overrides
                .weekend_multiplier
                .unwrap_or(self.weekend_multiplier),
            rest_multiplier: overrides.rest_multiplier.unwrap_or(self.rest_multiplier),
            vacation_day_rate: overrides
                .vacation_day_rate
                .unwrap_or(self.vacation_day_rate),
            bonus_quarterly: overrides.bonus_quarterly.unwrap_or(self.bonus_quarterly),
        }
    }

    /// Builds a config from the built-in defaults overlaid by `overrides`.
    pub fn from_overrides(overrides: &RateOverrides) -> Self {
        Self::default().with_overrides(overrides)
    }
}

/// Partial rate settings supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateOverrides {
    /// Base hourly rate override.
    pub base_rate: Option<Decimal>,
    /// Weekend multiplier override.
    pub weekend_multiplier: Option<Decimal>,
    /// Rest-window multiplier override.
    pub rest_multiplier: Option<Decimal>,
    /// Flat day rate override.
    pub vacation_day_rate: Option<Decimal>,
    /// Bonus override.
    pub bonus_quarterly: Option<Decimal>,
}

/// Identifies which year's statutory tables apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxYear(u16);

impl TaxYear {
    /// The 2025 tables.
    pub const Y2025: TaxYear = TaxYear(2025);
    /// The 2026 tables, used unless a caller asks for 2025.
    pub const Y2026: TaxYear = TaxYear(2026);

    /// Creates a tax year identifier.
    pub const fn new(year: u16) -> Self {
        Self(year)
    }

    /// Maps the legacy `use_2025` flag onto a year.
    pub const fn from_flag(use_2025: bool) -> Self {
        if use_2025 { Self::Y2025 } else { Self::Y2026 }
    }

    /// Returns the calendar year.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for TaxYear {
    fn default() -> Self {
        Self::Y2026
    }
}

impl fmt::Display for TaxYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which deductions apply to a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionToggles {
    /// Employee and employer pension contributions.
    pub pension: bool,
    /// Study fund contributions.
    pub study: bool,
    /// National and health insurance.
    pub ni: bool,
    /// Income tax withholding.
    pub income_tax: bool,
    /// Base the study fund on the whole salary instead of the capped amount.
    pub study_full_salary: bool,
    /// Use the 2025 tables instead of 2026.
    pub tax_year_2025: bool,
}

impl Default for DeductionToggles {
    fn default() -> Self {
        Self {
            pension: true,
            study: true,
            ni: true,
            income_tax: true,
            study_full_salary: false,
            tax_year_2025: false,
        }
    }
}

impl DeductionToggles {
    /// The tax year selected by these toggles.
    pub fn tax_year(&self) -> TaxYear {
        TaxYear::from_flag(self.tax_year_2025)
    }
}

/// Rates and ceilings for pension, study fund and national/health insurance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionConstants {
    /// Monthly income up to which the reduced insurance rates apply.
    pub ni_lower_ceiling: Decimal,
    /// Monthly income above which no insurance is charged.
    pub ni_upper_ceiling: Decimal,
    /// National insurance rate below the lower ceiling.
    pub ni_lower_rate: Decimal,
    /// National insurance rate between the ceilings.
    pub ni_upper_rate: Decimal,
    /// Health insurance rate below the lower ceiling.
    pub health_lower_rate: Decimal,
    /// Health insurance rate between the ceilings.
    pub health_upper_rate: Decimal,
    /// Employee pension rate.
    pub pension_employee_rate: Decimal,
    /// Employer pension rate.
    pub pension_employer_rate: Decimal,
    /// Employee study fund rate.
    pub study_employee_rate: Decimal,
    /// Employer study fund rate.
    pub study_employer_rate: Decimal,
    /// Monthly salary cap for study fund contributions.
    pub study_ceiling: Decimal,
}

/// One progressive income tax bracket.
///
/// `ceiling` is `None` for the open top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Upper bound of the bracket, exclusive of the next one.
    pub ceiling: Option<Decimal>,
    /// Marginal rate inside the bracket.
    pub rate: Decimal,
}

/// Statutory constants for a single tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearTable {
    /// The calendar year these constants belong to.
    pub year: TaxYear,
    /// Pension, study fund and insurance constants.
    pub deductions: DeductionConstants,
    /// Monthly income tax brackets in ascending order.
    pub monthly_brackets: Vec<TaxBracket>,
    /// Monthly value of a single credit point.
    pub credit_point_value: Decimal,
}

impl TaxYearTable {
    /// Annual brackets derived from the monthly table (ceilings × 12, same rates).
    pub fn annual_brackets(&self) -> Vec<TaxBracket> {
        let months = Decimal::from(12);
        self.monthly_brackets
            .iter()
            .map(|b| TaxBracket {
                ceiling: b.ceiling.map(|c| c * months),
                rate: b.rate,
            })
            .collect()
    }

    /// Checks the bracket table shape: strictly increasing ceilings and an open top bracket.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: format!("tax table {}", self.year),
            message,
        };

        let Some((last, rest)) = self.monthly_brackets.split_last() else {
            return Err(invalid("bracket table is empty".to_string()));
        };
        if last.ceiling.is_some() {
            return Err(invalid("last bracket must have no ceiling".to_string()));
        }

        let mut prev = Decimal::ZERO;
        for bracket in rest {
            match bracket.ceiling {
                Some(ceiling) if ceiling > prev => prev = ceiling,
                Some(ceiling) => {
                    return Err(invalid(format!(
                        "bracket ceiling {} does not exceed previous ceiling {}",
                        ceiling, prev
                    )));
                }
                None => return Err(invalid("only the last bracket may be open".to_string())),
            }
        }
        Ok(())
    }

    /// The built-in 2026 constants.
    pub fn israel_2026() -> Self {
        Self {
            year: TaxYear::Y2026,
            deductions: israeli_deductions(Decimal::new(7703, 0), Decimal::new(51910, 0)),
            monthly_brackets: brackets(&[7010, 10060, 16150, 22440, 46690, 60130]),
            credit_point_value: Decimal::new(242, 0),
        }
    }

    /// The built-in 2025 constants.
    pub fn israel_2025() -> Self {
        Self {
            year: TaxYear::Y2025,
            deductions: israeli_deductions(Decimal::new(7522, 0), Decimal::new(50695, 0)),
            monthly_brackets: brackets(&[6860, 9850, 15820, 21990, 45780, 58920]),
            credit_point_value: Decimal::new(242, 0),
        }
    }
}

fn israeli_deductions(ni_lower_ceiling: Decimal, ni_upper_ceiling: Decimal) -> DeductionConstants {
    DeductionConstants {
        ni_lower_ceiling,
        ni_upper_ceiling,
        ni_lower_rate: Decimal::new(4, 3),
        ni_upper_rate: Decimal::new(7, 2),
        health_lower_rate: Decimal::new(31, 3),
        health_upper_rate: Decimal::new(5, 2),
        pension_employee_rate: Decimal::new(6, 2),
        pension_employer_rate: Decimal::new(125, 3),
        study_employee_rate: Decimal::new(25, 3),
        study_employer_rate: Decimal::new(75, 3),
        study_ceiling: Decimal::new(15712, 0),
    }
}

// Rates are shared by both years: 10%, 14%, 20%, 31%, 35%, 47%, then 50% open.
fn brackets(ceilings: &[i64; 6]) -> Vec<TaxBracket> {
    const RATES: [i64; 7] = [10, 14, 20, 31, 35, 47, 50];
    let mut table: Vec<TaxBracket> = ceilings
        .iter()
        .zip(RATES)
        .map(|(&ceiling, rate)| TaxBracket {
            ceiling: Some(Decimal::from(ceiling)),
            rate: Decimal::new(rate, 2),
        })
        .collect();
    table.push(TaxBracket {
        ceiling: None,
        rate: Decimal::new(RATES[6], 2),
    });
    table
}

/// Registry of tax-year tables keyed by year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTables {
    tables: BTreeMap<TaxYear, TaxYearTable>,
}

impl TaxTables {
    /// Builds a registry from the given tables. A later table for the same year wins.
    pub fn new(tables: impl IntoIterator<Item = TaxYearTable>) -> Self {
        Self {
            tables: tables.into_iter().map(|t| (t.year, t)).collect(),
        }
    }

    /// The tables compiled into the crate (2025 and 2026).
    pub fn builtin() -> Self {
        Self::new([TaxYearTable::israel_2025(), TaxYearTable::israel_2026()])
    }

    /// Looks up the table for `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::config::{TaxTables, TaxYear};
    /// use rust_decimal::Decimal;
    ///
    /// let tables = TaxTables::builtin();
    /// let table = tables.table(TaxYear::Y2026).unwrap();
    /// assert_eq!(table.credit_point_value, Decimal::new(242, 0));
    /// assert!(tables.table(TaxYear::new(2019)).is_err());
    /// ```
    pub fn table(&self, year: TaxYear) -> EngineResult<&TaxYearTable> {
        self.tables
            .get(&year)
            .ok_or(EngineError::TaxYearNotFound { year: year.value() })
    }

    /// Years with a registered table, ascending.
    pub fn years(&self) -> impl Iterator<Item = TaxYear> + '_ {
        self.tables.keys().copied()
    }

    /// Number of registered years.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true when no table is registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for TaxTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Fixed monthly payments added to the gross of any month with shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedAdditions {
    /// Clothing allowance.
    pub clothing: Decimal,
    /// Convalescence pay.
    pub convalescence: Decimal,
    /// Telephone allowance.
    pub telephone: Decimal,
}

impl Default for FixedAdditions {
    fn default() -> Self {
        Self {
            clothing: Decimal::new(14808, 2),
            convalescence: Decimal::new(313, 0),
            telephone: Decimal::new(4860, 2),
        }
    }
}

impl FixedAdditions {
    /// Sum of all fixed additions, rounded to cents.
    pub fn total(&self) -> Decimal {
        crate::calculation::round_money(self.clothing + self.convalescence + self.telephone)
    }
}

/// The employee's full settings: rates, credit points, toggles and fixed additions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollProfile {
    /// Rates used to price shifts.
    pub rates: RateConfig,
    /// Income tax credit points.
    pub credit_points: Decimal,
    /// Which deductions apply.
    pub toggles: DeductionToggles,
    /// Fixed monthly additions.
    pub fixed_additions: FixedAdditions,
}

impl Default for PayrollProfile {
    fn default() -> Self {
        Self {
            rates: RateConfig::default(),
            credit_points: Decimal::new(225, 2),
            toggles: DeductionToggles::default(),
            fixed_additions: FixedAdditions::default(),
        }
    }
}
