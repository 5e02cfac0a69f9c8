//! Dashboard statistics over employees and payroll records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayrollPeriod, PayrollRecord};

/// Headline payroll figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Employees on record, active or not.
    pub total_employees: usize,
    /// Employees currently on the payroll.
    pub active_employees: usize,
    /// Payroll records of any period.
    pub total_payrolls: usize,
    /// Payroll records for the current period.
    pub current_period_payrolls: usize,
    /// Sum of net pay across the current period's records.
    pub current_period_net_pay: Decimal,
}

/// Summarizes employees and payroll records relative to `current_period`.
///
/// Fails only when the current period's net pay total exceeds `Decimal`'s
/// range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize;
/// use payroll_engine::models::PayrollPeriod;
/// use rust_decimal::Decimal;
///
/// let summary = summarize(&[], &[], PayrollPeriod::new(3, 2026).unwrap()).unwrap();
/// assert_eq!(summary.total_employees, 0);
/// assert_eq!(summary.current_period_net_pay, Decimal::ZERO);
/// ```
pub fn summarize(
    employees: &[Employee],
    records: &[PayrollRecord],
    current_period: PayrollPeriod,
) -> EngineResult<PayrollSummary> {
    let current: Vec<&PayrollRecord> = records
        .iter()
        .filter(|r| r.payroll_period == current_period)
        .collect();

    let current_period_net_pay = current
        .iter()
        .try_fold(Decimal::ZERO, |total, r| total.checked_add(r.net_pay))
        .ok_or_else(|| EngineError::InvalidInput {
            field: "payrolls".to_string(),
            message: format!("net pay total for {} is out of range", current_period),
        })?;

    Ok(PayrollSummary {
        total_employees: employees.len(),
        active_employees: employees.iter().filter(|e| e.is_active()).count(),
        total_payrolls: records.len(),
        current_period_payrolls: current.len(),
        current_period_net_pay,
    })
}
