//! Compensation input and payroll breakdown models.
//!
//! [`CompensationInput`] is what the calculator consumes for a single pay
//! period and [`PayrollBreakdown`] is what it returns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest magnitude accepted for any single input (100 trillion).
///
/// With every field within this bound, no intermediate amount of the
/// standard calculation can leave `Decimal`'s range.
pub fn max_input_magnitude() -> Decimal {
    Decimal::new(100_000_000_000_000, 0)
}

/// Compensation inputs for one employee and one pay period.
///
/// All amounts are in the same currency units as the monthly salary. Values
/// are expected to be non-negative and no larger than
/// [`max_input_magnitude`], but the calculator accepts anything; callers
/// check with [`CompensationInput::validate`].
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput {
///     base_monthly_salary: Decimal::new(48000, 0),
///     hours_worked: Decimal::new(160, 0),
///     overtime_hours: Decimal::new(10, 0),
///     allowances: Decimal::new(200, 0),
///     deductions: Decimal::new(100, 0),
/// };
/// assert!(input.negative_fields().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// The employee's monthly base salary.
    pub base_monthly_salary: Decimal,
    /// Regular hours worked in the period.
    pub hours_worked: Decimal,
    /// Hours explicitly booked as overtime.
    pub overtime_hours: Decimal,
    /// Allowances added to gross pay.
    #[serde(default)]
    pub allowances: Decimal,
    /// Deductions taken after tax.
    #[serde(default)]
    pub deductions: Decimal,
}

impl CompensationInput {
    fn fields(&self) -> [(&'static str, Decimal); 5] {
        [
            ("base_monthly_salary", self.base_monthly_salary),
            ("hours_worked", self.hours_worked),
            ("overtime_hours", self.overtime_hours),
            ("allowances", self.allowances),
            ("deductions", self.deductions),
        ]
    }

    /// Returns the names of every field holding a negative value.
    pub fn negative_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.is_sign_negative() && !value.is_zero())
            .map(|(name, _)| name)
            .collect()
    }

    /// Returns the names of every field whose magnitude exceeds
    /// [`max_input_magnitude`].
    pub fn out_of_range_fields(&self) -> Vec<&'static str> {
        let limit = max_input_magnitude();
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.abs() > limit)
            .map(|(name, _)| name)
            .collect()
    }

    /// Checks that every field is non-negative and within
    /// [`max_input_magnitude`].
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(field) = self.negative_fields().first() {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if let Some(field) = self.out_of_range_fields().first() {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!("must not exceed {}", max_input_magnitude()),
            });
        }
        Ok(())
    }
}

/// Gross pay, tax and net pay for one pay period, each rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Total compensation before tax and deductions.
    pub gross_pay: Decimal,
    /// Tax liability under the progressive schedule.
    pub taxes: Decimal,
    /// Take-home amount after tax and deductions.
    pub net_pay: Decimal,
}
