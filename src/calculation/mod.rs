//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pure payroll calculator (gross pay, progressive
//! tax, net pay and the combined breakdown), currency rounding, payroll
//! processing for an employee, and dashboard summaries.

mod arithmetic;
mod gross_pay;
mod net_pay;
mod payroll;
mod processing;
mod rounding;
mod summary;
mod tax;

pub use gross_pay::{
    GrossPayResult, calculate_gross_pay, compute_gross_pay, overtime_multiplier,
    standard_period_hours,
};
pub use net_pay::{NetPayResult, calculate_net_pay, compute_net_pay};
pub use payroll::{
    PayrollCalculation, WARNING_AMOUNT_OUT_OF_RANGE, WARNING_HOURS_FORFEITED,
    WARNING_NEGATIVE_INPUT, WARNING_NEGATIVE_NET_PAY, calculate_payroll,
    compute_payroll_breakdown,
};
pub use processing::{PayrollRunInput, payslips_for, process_payroll, sort_newest_first};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use summary::{PayrollSummary, summarize};
pub use tax::{TaxResult, calculate_tax, compute_tax, compute_tax_with_schedule};
