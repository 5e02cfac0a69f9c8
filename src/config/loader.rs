//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PayrollFile, PayrollSettings, TaxFile, TaxSchedule};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml   # Metadata and gross pay settings
/// └── tax.yaml       # Progressive tax brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Loaded configuration: {}", loader.config().metadata().name);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// has non-positive settings, or describes an invalid tax schedule.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let payroll_path = path.join("payroll.yaml");
        let payroll = Self::load_yaml::<PayrollFile>(&payroll_path)?;
        Self::validate_settings(&payroll.settings, &payroll_path)?;

        let tax_path = path.join("tax.yaml");
        let tax_file = Self::load_yaml::<TaxFile>(&tax_path)?;
        let tax = TaxSchedule::new(tax_file.brackets)?;

        let config = PayrollConfig::new(payroll.metadata, payroll.settings, tax);

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
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

    fn validate_settings(settings: &PayrollSettings, path: &Path) -> EngineResult<()> {
        let checks = [
            ("standard_period_hours", settings.standard_period_hours),
            ("overtime_multiplier", settings.overtime_multiplier),
        ];
        for (name, value) in checks {
            if value <= Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("{} must be positive, got {}", name, value),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}
