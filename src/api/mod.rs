//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST API endpoints for payroll calculation,
//! payroll processing and dashboard summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ProcessPayrollRequest, SummaryRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
