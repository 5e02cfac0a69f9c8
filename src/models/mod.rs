//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod compensation;
mod employee;
mod payroll_record;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use compensation::{CompensationInput, PayrollBreakdown, max_input_magnitude};
pub use employee::{BankDetails, Employee, EmployeeStatus};
pub use payroll_record::{PayrollPeriod, PayrollRecord, PayrollStatus};
