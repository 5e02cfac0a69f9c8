//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, together with the
//! built-in defaults used when no configuration directory is given.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{overtime_multiplier, standard_period_hours};
use crate::error::{EngineError, EngineResult};

/// Metadata about the payroll configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of this configuration.
    pub name: String,
    /// The version or effective date of the configuration.
    pub version: String,
    /// Currency code the amounts are expressed in.
    pub currency: String,
}

impl Default for EngineMetadata {
    fn default() -> Self {
        Self {
            name: "Standard Monthly Payroll".to_string(),
            version: "built-in".to_string(),
            currency: "USD".to_string(),
        }
    }
}

/// Settings that drive the gross pay calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PayrollSettings {
    /// Hours in a standard monthly period; the hourly rate is salary divided by this.
    pub standard_period_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            standard_period_hours: standard_period_hours(),
            overtime_multiplier: overtime_multiplier(),
        }
    }
}

/// Payroll configuration file structure (`payroll.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollFile {
    /// Configuration metadata.
    #[serde(flatten)]
    pub metadata: EngineMetadata,
    /// Calculation settings.
    pub settings: PayrollSettings,
}

/// One bracket of a progressive tax schedule.
///
/// The marginal `rate` applies to the part of gross pay between `lower` and
/// `upper`. The top bracket has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (inclusive).
    pub lower: Decimal,
    /// Upper bound of the bracket, or `None` for the top bracket.
    pub upper: Option<Decimal>,
    /// Marginal rate as a fraction (0.05 = 5%).
    pub rate: Decimal,
}

/// Tax configuration file structure (`tax.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TaxFile {
    /// Brackets in ascending order.
    pub brackets: Vec<TaxBracket>,
}

/// A validated progressive tax schedule.
///
/// Brackets start at zero, are contiguous, carry non-negative rates, and
/// only the last one is unbounded.
///
/// # Example
///
/// ```
/// use payroll_engine::config::TaxSchedule;
///
/// let schedule = TaxSchedule::standard();
/// assert_eq!(schedule.brackets().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Builds a schedule from brackets, checking that they form a valid
    /// progressive schedule.
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let invalid = |message: String| -> EngineResult<Self> {
            Err(EngineError::InvalidTaxSchedule { message })
        };

        let Some(first) = brackets.first() else {
            return invalid("at least one bracket is required".to_string());
        };
        if !first.lower.is_zero() {
            return invalid(format!("first bracket must start at 0, not {}", first.lower));
        }

        let last_index = brackets.len() - 1;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate.is_sign_negative() && !bracket.rate.is_zero() {
                return invalid(format!("bracket {} has a negative rate", index + 1));
            }
            match bracket.upper {
                Some(upper) if upper <= bracket.lower => {
                    return invalid(format!(
                        "bracket {} upper bound {} is not above its lower bound {}",
                        index + 1,
                        upper,
                        bracket.lower
                    ));
                }
                Some(upper) => {
                    if index == last_index {
                        return invalid("the last bracket must be unbounded".to_string());
                    }
                    let next_lower = brackets[index + 1].lower;
                    if next_lower != upper {
                        return invalid(format!(
                            "bracket {} ends at {} but bracket {} starts at {}",
                            index + 1,
                            upper,
                            index + 2,
                            next_lower
                        ));
                    }
                }
                None if index != last_index => {
                    return invalid(format!(
                        "only the last bracket may be unbounded, not bracket {}",
                        index + 1
                    ));
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// The standard schedule: 5% to 30,000, 10% to 60,000, 15% to 100,000
    /// and 20% above.
    pub fn standard() -> Self {
        let bracket = |lower: i64, upper: Option<i64>, rate_pct: i64| TaxBracket {
            lower: Decimal::new(lower, 0),
            upper: upper.map(|u| Decimal::new(u, 0)),
            rate: Decimal::new(rate_pct, 2),
        };
        Self {
            brackets: vec![
                bracket(0, Some(30_000), 5),
                bracket(30_000, Some(60_000), 10),
                bracket(60_000, Some(100_000), 15),
                bracket(100_000, None, 20),
            ],
        }
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the index of the bracket that `gross_pay` falls in.
    ///
    /// Amounts on a boundary belong to the lower bracket; amounts below zero
    /// belong to the first.
    pub fn bracket_index(&self, gross_pay: Decimal) -> usize {
        self.brackets
            .iter()
            .position(|b| b.upper.is_none_or(|upper| gross_pay <= upper))
            .unwrap_or(self.brackets.len() - 1)
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// The complete payroll configuration.
#[derive(Debug, Clone, Default)]
pub struct PayrollConfig {
    metadata: EngineMetadata,
    settings: PayrollSettings,
    tax: TaxSchedule,
}

impl PayrollConfig {
    /// Creates a new payroll configuration.
    pub fn new(metadata: EngineMetadata, settings: PayrollSettings, tax: TaxSchedule) -> Self {
        Self {
            metadata,
            settings,
            tax,
        }
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the gross pay settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the tax schedule.
    pub fn tax(&self) -> &TaxSchedule {
        &self.tax
    }
}
