//! Employee model and related types.
//!
//! This module defines the Employee struct along with its bank details and
//! employment status.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether an employee is currently on the payroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// The employee is paid in payroll runs.
    Active,
    /// The employee is kept on record but no longer paid.
    Inactive,
}

/// Where an employee's net pay is deposited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    /// Name of the bank.
    pub bank_name: String,
    /// Account number at the bank.
    pub account_number: String,
    /// Name the account is held under.
    pub account_name: String,
}

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub fullname: String,
    /// Contact email address.
    pub email: String,
    /// Job title or position.
    pub position: String,
    /// Base monthly salary.
    pub salary: Decimal,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// Bank account for salary payments.
    pub bank_details: BankDetails,
    /// Current employment status.
    pub status: EmployeeStatus,
    /// Identifier of the account that created this record.
    pub created_by: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Returns true if the employee is eligible for payroll processing.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
