//! Payroll processing for a single employee.
//!
//! Processing is the validating caller of the calculator: it checks that the
//! employee is active and that the period inputs make sense, runs the
//! calculation against the employee's salary, and returns a
//! [`PayrollRecord`] for the caller to store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompensationInput, Employee, PayrollPeriod, PayrollRecord, PayrollStatus, max_input_magnitude,
};

use super::payroll::calculate_payroll;

/// Period inputs entered when processing an employee's payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunInput {
    /// The month being paid.
    pub payroll_period: PayrollPeriod,
    /// Regular hours worked.
    pub hours_worked: Decimal,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime: Decimal,
    /// Allowances for the period.
    #[serde(default)]
    pub allowances: Decimal,
    /// Post-tax deductions for the period.
    #[serde(default)]
    pub deductions: Decimal,
}

impl PayrollRunInput {
    fn validate(&self) -> EngineResult<()> {
        self.payroll_period.validate()?;

        let fields = [
            ("hours_worked", self.hours_worked),
            ("overtime", self.overtime),
            ("allowances", self.allowances),
            ("deductions", self.deductions),
        ];
        if let Some((field, value)) = fields.iter().find(|(_, value)| *value < Decimal::ZERO) {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!("must not be negative, got {}", value),
            });
        }

        let limit = max_input_magnitude();
        match fields.iter().find(|(_, value)| *value > limit) {
            Some((field, value)) => Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: format!("must not exceed {}, got {}", limit, value),
            }),
            None => Ok(()),
        }
    }
}

/// Processes one period of payroll for `employee`.
///
/// Returns an error if the employee is inactive, the salary is negative or
/// above [`max_input_magnitude`], the period month is not 1 through 12, or
/// any hours/amount input is negative or above that bound.
pub fn process_payroll(
    employee: &Employee,
    run: &PayrollRunInput,
    processed_by: &str,
    processed_at: DateTime<Utc>,
    config: &PayrollConfig,
) -> EngineResult<PayrollRecord> {
    if !employee.is_active() {
        return Err(EngineError::InvalidEmployee {
            field: "status".to_string(),
            message: format!("employee '{}' is inactive", employee.id),
        });
    }
    if employee.salary < Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            field: "salary".to_string(),
            message: format!("must not be negative, got {}", employee.salary),
        });
    }
    if employee.salary > max_input_magnitude() {
        return Err(EngineError::InvalidEmployee {
            field: "salary".to_string(),
            message: format!(
                "must not exceed {}, got {}",
                max_input_magnitude(),
                employee.salary
            ),
        });
    }
    run.validate()?;

    let input = CompensationInput {
        base_monthly_salary: employee.salary,
        hours_worked: run.hours_worked,
        overtime_hours: run.overtime,
        allowances: run.allowances,
        deductions: run.deductions,
    };
    let calculation = calculate_payroll(&input, config);

    for warning in &calculation.audit_trace.warnings {
        warn!(
            employee_id = %employee.id,
            period = %run.payroll_period,
            code = %warning.code,
            "{}",
            warning.message
        );
    }

    let record = PayrollRecord {
        id: Uuid::new_v4(),
        employee_id: employee.id.clone(),
        payroll_period: run.payroll_period,
        hours_worked: run.hours_worked,
        overtime: run.overtime,
        allowances: run.allowances,
        deductions: run.deductions,
        gross_pay: calculation.breakdown.gross_pay,
        taxes: calculation.breakdown.taxes,
        net_pay: calculation.breakdown.net_pay,
        processing_date: processed_at,
        processed_by: processed_by.to_string(),
        status: PayrollStatus::Processed,
    };

    debug!(
        record_id = %record.id,
        employee_id = %record.employee_id,
        period = %record.payroll_period,
        net_pay = %record.net_pay,
        "Payroll processed"
    );

    Ok(record)
}

/// Orders records newest period first. Records for the same period keep
/// their relative order.
pub fn sort_newest_first(records: &mut [PayrollRecord]) {
    records.sort_by(|a, b| b.payroll_period.cmp(&a.payroll_period));
}

/// Returns the payslips of one employee, newest period first.
pub fn payslips_for(employee_id: &str, records: &[PayrollRecord]) -> Vec<PayrollRecord> {
    let mut payslips: Vec<PayrollRecord> = records
        .iter()
        .filter(|r| r.employee_id == employee_id)
        .cloned()
        .collect();
    sort_newest_first(&mut payslips);
    payslips
}
