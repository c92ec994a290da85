//! Configuration loading and management for the salary ledger.
//!
//! This module loads the service configuration from a YAML file: listener
//! address, listing page sizes, display currency symbol and log level.
//!
//! # Example
//!
//! ```no_run
//! use salary_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salary-ledger.yaml").unwrap();
//! println!("Listening on {}", config.config().server.bind_address());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{AppConfig, DisplayConfig, ListingConfig, LoggingConfig, ServerConfig};
