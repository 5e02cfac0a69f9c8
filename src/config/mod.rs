//! Configuration loading and management for the Payroll Engine.
//!
//! This module loads the gross pay settings and the progressive tax schedule
//! from YAML files, or falls back to the built-in standard configuration.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded configuration: {}", config.config().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineMetadata, PayrollConfig, PayrollFile, PayrollSettings, TaxBracket, TaxFile, TaxSchedule,
};
