//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_payroll, process_payroll, summarize};

use super::request::{CalculationRequest, ProcessPayrollRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payroll/process", post(process_handler))
        .route("/payroll/summary", post(summary_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate.
///
/// Runs the payroll calculator on the given inputs and returns the breakdown
/// with its audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let input = match request.into_input() {
        Ok(input) => input,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid calculation input");
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    let calculation = calculate_payroll(&input, state.config().config());
    info!(
        correlation_id = %correlation_id,
        gross_pay = %calculation.breakdown.gross_pay,
        net_pay = %calculation.breakdown.net_pay,
        warnings = calculation.audit_trace.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    let response = CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        input,
        gross_pay: calculation.breakdown.gross_pay,
        taxes: calculation.breakdown.taxes,
        net_pay: calculation.breakdown.net_pay,
        audit_trace: calculation.audit_trace,
    };
    json_response(StatusCode::OK, response)
}

/// Handler for POST /payroll/process.
///
/// Processes one period of payroll for an employee and returns the new
/// record. Nothing is stored; persisting the record is up to the caller.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessPayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let (employee, run, processed_by) = request.into_parts();

    match process_payroll(
        &employee,
        &run,
        &processed_by,
        Utc::now(),
        state.config().config(),
    ) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                period = %record.payroll_period,
                net_pay = %record.net_pay,
                "Payroll processed successfully"
            );
            json_response(StatusCode::OK, record)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                error = %err,
                "Payroll processing failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /payroll/summary.
async fn summary_handler(payload: Result<Json<SummaryRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    if let Err(err) = request.period.validate() {
        return error_response(err.into());
    }

    let summary = match summarize(&request.employees, &request.payrolls, request.period) {
        Ok(summary) => summary,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Summary failed");
            return error_response(err.into());
        }
    };
    info!(
        correlation_id = %correlation_id,
        total_employees = summary.total_employees,
        total_payrolls = summary.total_payrolls,
        "Summary computed"
    );
    json_response(StatusCode::OK, summary)
}
