//! Application state for the payroll API.

use std::sync::Arc;

use crate::config::{ConfigLoader, TaxTables};

/// Shared application state.
///
/// Holds the tax-year tables every handler calculates against.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the loaded tax-year tables.
    pub fn tables(&self) -> &TaxTables {
        self.config.tables()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::builtin())
    }
}
