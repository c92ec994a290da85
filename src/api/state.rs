//! Application state for the salary ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::SalaryStore;

/// Shared application state.
///
/// Holds the record store and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn SalaryStore>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: impl SalaryStore + 'static, config: AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn SalaryStore {
        self.store.as_ref()
    }

    /// Returns the service configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
