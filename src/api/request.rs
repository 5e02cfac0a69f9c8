//! Request types for the Payroll Engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PayrollRunInput;
use crate::error::EngineResult;
use crate::models::{CompensationInput, Employee, PayrollPeriod, PayrollRecord};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee's monthly base salary.
    pub base_monthly_salary: Decimal,
    /// Regular hours worked in the period.
    pub hours_worked: Decimal,
    /// Hours booked as overtime.
    pub overtime_hours: Decimal,
    /// Allowances added to gross pay.
    #[serde(default)]
    pub allowances: Decimal,
    /// Deductions taken after tax.
    #[serde(default)]
    pub deductions: Decimal,
}

impl CalculationRequest {
    /// Converts the request into calculator input, rejecting negative or
    /// oversized values.
    pub fn into_input(self) -> EngineResult<CompensationInput> {
        let input = CompensationInput {
            base_monthly_salary: self.base_monthly_salary,
            hours_worked: self.hours_worked,
            overtime_hours: self.overtime_hours,
            allowances: self.allowances,
            deductions: self.deductions,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Request body for the `/payroll/process` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPayrollRequest {
    /// The employee being paid.
    pub employee: Employee,
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
    /// Identifier of the account processing the payroll.
    pub processed_by: String,
}

impl ProcessPayrollRequest {
    /// Splits the request into the employee, the run inputs and the processor id.
    pub fn into_parts(self) -> (Employee, PayrollRunInput, String) {
        let run = PayrollRunInput {
            payroll_period: self.payroll_period,
            hours_worked: self.hours_worked,
            overtime: self.overtime,
            allowances: self.allowances,
            deductions: self.deductions,
        };
        (self.employee, run, self.processed_by)
    }
}

/// Request body for the `/payroll/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Employees on record.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Payroll records on file.
    #[serde(default)]
    pub payrolls: Vec<PayrollRecord>,
    /// The period treated as current.
    pub period: PayrollPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "base_monthly_salary": "48000",
            "hours_worked": "160",
            "overtime_hours": "10",
            "allowances": "200",
            "deductions": "100"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base_monthly_salary, Decimal::new(48000, 0));
        assert_eq!(request.deductions, Decimal::new(100, 0));
    }

    #[test]
    fn test_calculation_request_accepts_json_numbers() {
        let json = r#"{
            "base_monthly_salary": 48000,
            "hours_worked": 160,
            "overtime_hours": 0
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.hours_worked, Decimal::new(160, 0));
        assert_eq!(request.allowances, Decimal::ZERO);
    }

    #[test]
    fn test_into_input_rejects_negative_field() {
        let request = CalculationRequest {
            base_monthly_salary: Decimal::new(48000, 0),
            hours_worked: Decimal::new(-1, 0),
            overtime_hours: Decimal::ZERO,
            allowances: Decimal::ZERO,
            deductions: Decimal::ZERO,
        };

        match request.into_input().unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "hours_worked"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_into_input_rejects_oversized_field() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{
                "base_monthly_salary": "1000000000000000000000",
                "hours_worked": "160",
                "overtime_hours": "100000000000"
            }"#,
        )
        .unwrap();

        match request.into_input().unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "base_monthly_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_process_request_into_parts() {
        let json = r#"{
            "employee": {
                "id": "emp_001",
                "fullname": "Jane Doe",
                "email": "jane@example.com",
                "position": "Accountant",
                "salary": "48000",
                "join_date": "2025-02-01",
                "bank_details": {
                    "bank_name": "First Bank",
                    "account_number": "0123456789",
                    "account_name": "Jane Doe"
                },
                "status": "active",
                "created_by": "1",
                "created_at": "2025-02-01T09:00:00Z",
                "updated_at": "2025-02-01T09:00:00Z"
            },
            "payroll_period": { "month": 3, "year": 2026 },
            "hours_worked": "160",
            "overtime": "10",
            "processed_by": "admin_1"
        }"#;

        let request: ProcessPayrollRequest = serde_json::from_str(json).unwrap();
        let (employee, run, processed_by) = request.into_parts();

        assert_eq!(employee.id, "emp_001");
        assert_eq!(run.payroll_period, PayrollPeriod { month: 3, year: 2026 });
        assert_eq!(run.overtime, Decimal::new(10, 0));
        assert_eq!(run.allowances, Decimal::ZERO);
        assert_eq!(processed_by, "admin_1");
    }

    #[test]
    fn test_summary_request_defaults_to_empty_lists() {
        let json = r#"{ "period": { "month": 1, "year": 2026 } }"#;

        let request: SummaryRequest = serde_json::from_str(json).unwrap();
        assert!(request.employees.is_empty());
        assert!(request.payrolls.is_empty());
    }
}
