//! HTTP request handlers for the dashboard API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Department, Gender};

use super::response::{ApiErrorResponse, AverageSalaryResponse, HealthResponse, HistogramEntry};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/departments", get(departments_handler))
        .route(
            "/departments/:dept_no/gender-counts",
            get(gender_counts_handler),
        )
        .route(
            "/departments/:dept_no/average-salary",
            get(average_salary_handler),
        )
        .route(
            "/departments/:dept_no/salary-histogram",
            get(salary_histogram_handler),
        )
        .route("/departments/:dept_no/summary", get(summary_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.dashboard().store();
    Json(HealthResponse {
        status: "ok",
        current_date: store.current_date(),
        snapshot: store.stats(),
    })
}

/// Handler for GET /departments.
async fn departments_handler(State(state): State<AppState>) -> Json<Vec<Department>> {
    Json(state.dashboard().list_departments().to_vec())
}

/// Handler for GET /departments/:dept_no/gender-counts.
///
/// Only genders present in the department appear in the body.
async fn gender_counts_handler(
    State(state): State<AppState>,
    Path(dept_no): Path<String>,
) -> Json<BTreeMap<Gender, u64>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, dept_no = %dept_no, "Counting employees per gender");

    let counts = state.dashboard().count_by_gender(&dept_no);
    Json(counts.into_iter().collect())
}

/// Handler for GET /departments/:dept_no/average-salary.
async fn average_salary_handler(
    State(state): State<AppState>,
    Path(dept_no): Path<String>,
) -> Json<AverageSalaryResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, dept_no = %dept_no, "Computing average salary");

    let average_salary = state.dashboard().average_salary(&dept_no);
    Json(AverageSalaryResponse {
        dept_no,
        average_salary,
    })
}

/// Handler for GET /departments/:dept_no/salary-histogram.
///
/// Entries are unsorted; clients sort and split by gender.
async fn salary_histogram_handler(
    State(state): State<AppState>,
    Path(dept_no): Path<String>,
) -> Json<Vec<HistogramEntry>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, dept_no = %dept_no, "Computing salary histogram");

    let entries = state
        .dashboard()
        .salary_histogram(&dept_no)
        .into_iter()
        .map(|h| HistogramEntry {
            gender: h.gender,
            interval: h.interval,
            bucket_start: h.bucket_start(),
            frequency: h.frequency,
        })
        .collect();
    Json(entries)
}

/// Handler for GET /departments/:dept_no/summary.
///
/// Returns 404 for a department that is not in the snapshot.
async fn summary_handler(
    State(state): State<AppState>,
    Path(dept_no): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, dept_no = %dept_no, "Building department summary");

    match state.dashboard().summary(&dept_no) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                dept_no = %dept_no,
                headcount = summary.headcount,
                average_salary = %summary.average_salary,
                "Department summary built"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Department summary failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
