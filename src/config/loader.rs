//! Tax-year table loading.
//!
//! This module provides the [`ConfigLoader`] type for reading statutory
//! constants from YAML files, so a new year is a data file rather than code.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{TaxTables, TaxYear, TaxYearTable};

/// Loads and provides access to tax-year tables.
///
/// # Directory Structure
///
/// ```text
/// config/tax_years/
/// ├── 2025.yaml
/// └── 2026.yaml
/// ```
///
/// Every `.yaml` file in the directory holds one [`TaxYearTable`].
///
/// # Example
///
/// ```no_run
/// use shift_payroll::config::{ConfigLoader, TaxYear};
///
/// let loader = ConfigLoader::load("./config/tax_years").unwrap();
/// let table = loader.table(TaxYear::Y2026).unwrap();
/// println!("Credit point value: {}", table.credit_point_value);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: TaxTables,
}

impl ConfigLoader {
    /// Loads every tax-year table from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The directory is missing or contains no `.yaml` files
    /// - Any file contains invalid YAML or a malformed bracket table
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.is_dir() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut tables = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let table = Self::load_yaml::<TaxYearTable>(&path)?;
                table.validate()?;
                debug!(year = %table.year, path = %path.display(), "Loaded tax-year table");
                tables.push(table);
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax-year files found)", dir_str),
            });
        }

        Ok(Self {
            tables: TaxTables::new(tables),
        })
    }

    /// Wraps the built-in tables, for callers without a config directory.
    pub fn builtin() -> Self {
        Self {
            tables: TaxTables::builtin(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded registry.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }

    /// Gets the table for a single year.
    pub fn table(&self, year: TaxYear) -> EngineResult<&TaxYearTable> {
        self.tables.table(year)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::builtin()
    }
}
