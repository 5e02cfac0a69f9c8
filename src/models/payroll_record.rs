//! Payroll period and processed payroll record models.
//!
//! This module contains the [`PayrollPeriod`] used to label a payroll run and
//! the [`PayrollRecord`] produced when an employee's payroll is processed.

use std::fmt;

use chrono::{DateTime, Month, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// A calendar month that payroll is run for.
///
/// Periods order chronologically (by year, then month).
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollPeriod;
///
/// let march = PayrollPeriod::new(3, 2026).unwrap();
/// let april = PayrollPeriod::new(4, 2026).unwrap();
///
/// assert!(march < april);
/// assert_eq!(march.to_string(), "March 2026");
/// assert!(PayrollPeriod::new(13, 2026).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayrollPeriod {
    /// Month of the year, 1 through 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl PayrollPeriod {
    /// Creates a period, rejecting months outside 1..=12.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        let period = Self { month, year };
        period.validate()?;
        Ok(period)
    }

    /// Checks that the month names a real calendar month.
    pub fn validate(&self) -> EngineResult<()> {
        self.calendar_month()
            .map(|_| ())
            .ok_or(EngineError::InvalidPayrollPeriod {
                month: self.month,
                year: self.year,
            })
    }

    fn calendar_month(&self) -> Option<Month> {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
    }
}

impl Ord for PayrollPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for PayrollPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PayrollPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.calendar_month() {
            Some(month) => write!(f, "{} {}", month.name(), self.year),
            None => write!(f, "month {} {}", self.month, self.year),
        }
    }
}

/// Lifecycle state of a payroll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Created but not yet processed.
    Pending,
    /// Calculated and approved for payment.
    Processed,
    /// Paid out to the employee.
    Paid,
}

/// A processed payroll run for one employee and one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The employee this record pays.
    pub employee_id: String,
    /// The month this record covers.
    pub payroll_period: PayrollPeriod,
    /// Regular hours worked.
    pub hours_worked: Decimal,
    /// Overtime hours worked.
    pub overtime: Decimal,
    /// Allowances paid.
    pub allowances: Decimal,
    /// Post-tax deductions.
    pub deductions: Decimal,
    /// Gross pay, rounded to cents.
    pub gross_pay: Decimal,
    /// Tax withheld, rounded to cents.
    pub taxes: Decimal,
    /// Net pay, rounded to cents.
    pub net_pay: Decimal,
    /// When the record was processed.
    pub processing_date: DateTime<Utc>,
    /// Identifier of the account that processed the record.
    pub processed_by: String,
    /// Current lifecycle state.
    pub status: PayrollStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_rejects_month_zero() {
        let result = PayrollPeriod::new(0, 2026);
        match result.unwrap_err() {
            EngineError::InvalidPayrollPeriod { month, year } => {
                assert_eq!(month, 0);
                assert_eq!(year, 2026);
            }
            other => panic!("Expected InvalidPayrollPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_period_rejects_month_thirteen() {
        assert!(PayrollPeriod::new(13, 2026).is_err());
    }

    #[test]
    fn test_period_accepts_every_calendar_month() {
        for month in 1..=12 {
            assert!(PayrollPeriod::new(month, 2026).is_ok());
        }
    }

    #[test]
    fn test_period_ordering_is_year_then_month() {
        let dec_2025 = PayrollPeriod::new(12, 2025).unwrap();
        let jan_2026 = PayrollPeriod::new(1, 2026).unwrap();
        let feb_2026 = PayrollPeriod::new(2, 2026).unwrap();

        assert!(dec_2025 < jan_2026);
        assert!(jan_2026 < feb_2026);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(PayrollPeriod::new(1, 2026).unwrap().to_string(), "January 2026");
        assert_eq!(
            PayrollPeriod { month: 14, year: 2026 }.to_string(),
            "month 14 2026"
        );
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PayrollStatus::Processed).unwrap(),
            "\"processed\""
        );
        let status: PayrollStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(status, PayrollStatus::Paid);
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "id": "6f1c2b9e-8d3a-4f5e-9a7b-1c2d3e4f5a6b",
            "employee_id": "emp_001",
            "payroll_period": { "month": 3, "year": 2026 },
            "hours_worked": "160",
            "overtime": "10",
            "allowances": "200",
            "deductions": "100",
            "gross_pay": "52700.00",
            "taxes": "3770.00",
            "net_pay": "48830.00",
            "processing_date": "2026-03-31T12:00:00Z",
            "processed_by": "1",
            "status": "processed"
        }"#;

        let record: PayrollRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.payroll_period, PayrollPeriod::new(3, 2026).unwrap());
        assert_eq!(record.net_pay, Decimal::new(4883000, 2));
        assert_eq!(record.status, PayrollStatus::Processed);
    }
}
