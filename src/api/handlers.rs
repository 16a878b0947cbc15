//! HTTP request handlers for the Attendance Classification Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::classification::summarize_attendance;
use crate::models::ReportingPeriod;
use crate::normalize::{normalize_rows, rows_from_cells};

use super::request::AnalyzeRequest;
use super::response::{AnalyzeResponse, ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .with_state(state)
}

/// Handler for the POST /analyze endpoint.
///
/// Accepts one file's worth of extracted rows and returns the per-employee
/// attendance summaries.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analyze request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Enforce the row shape; a malformed row fails the whole batch.
    let raw_rows = match rows_from_cells(&request.rows) {
        Ok(rows) => rows,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Malformed input row");
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let start_time = Instant::now();
    let row_count = raw_rows.len();
    let punches = normalize_rows(raw_rows);
    let dropped = row_count - punches.len();

    let reporting_period = ReportingPeriod::from_punches(&punches);
    let employees = summarize_attendance(&punches, state.policy());

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        rows = row_count,
        dropped_rows = dropped,
        employees = employees.len(),
        duration_us = duration.as_micros(),
        "Analysis completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(AnalyzeResponse {
            reporting_period,
            employees,
        }),
    )
        .into_response()
}
