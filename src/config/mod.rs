//! Configuration for the payroll engine.
//!
//! Holds caller-owned rate settings and deduction toggles, and the
//! year-keyed statutory tables, either built in or loaded from YAML.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::{ConfigLoader, TaxYear};
//!
//! let loader = ConfigLoader::load("./config/tax_years").unwrap();
//! println!("Years: {:?}", loader.tables().years().collect::<Vec<_>>());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DeductionConstants, DeductionToggles, FixedAdditions, PayrollProfile, RateConfig, RateOverrides,
    TaxBracket, TaxTables, TaxYear, TaxYearTable,
};
