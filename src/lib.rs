//! Payroll Engine
//!
//! This crate computes monthly payroll: gross pay from salary, hours,
//! overtime and allowances; tax under a progressive bracket schedule; and
//! net pay after deductions. It also builds payroll records for employees
//! and serves the calculator over an HTTP JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
