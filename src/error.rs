//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation functions themselves never fail; these errors come from
//! configuration loading, from the validation done by callers of the
//! calculator (payroll processing and the HTTP API), and from summary totals
//! that do not fit in a `Decimal`.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured tax brackets do not form a valid progressive schedule.
    #[error("Invalid tax schedule: {message}")]
    InvalidTaxSchedule {
        /// What is wrong with the schedule.
        message: String,
    },

    /// A payroll input failed validation.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending input field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An employee record was invalid or not eligible for processing.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The payroll period does not name a real calendar month.
    #[error("Invalid payroll period: month {month} of {year}")]
    InvalidPayrollPeriod {
        /// The requested month.
        month: u32,
        /// The requested year.
        year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
