//! Response types for the dashboard API.
//!
//! This module defines the JSON bodies returned by the department
//! endpoints, the error response structure, and the mapping from
//! [`DashboardError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::models::Gender;
use crate::store::SnapshotStats;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` once the server is serving.
    pub status: &'static str,
    /// The date salaries are compared against.
    pub current_date: NaiveDate,
    /// Row counts of the loaded snapshot.
    pub snapshot: SnapshotStats,
}

/// Body of `GET /departments/:dept_no/average-salary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageSalaryResponse {
    /// The department queried.
    pub dept_no: String,
    /// Mean current salary; zero when there are no current salaries.
    pub average_salary: Decimal,
}

/// One entry of `GET /departments/:dept_no/salary-histogram`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramEntry {
    /// Gender key.
    pub gender: Gender,
    /// Salary bucket key.
    pub interval: i32,
    /// Bucket start in currency units.
    pub bucket_start: i64,
    /// Number of employees in the bucket.
    pub frequency: u64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a department not found error response.
    pub fn department_not_found(dept_no: &str) -> Self {
        Self::with_details(
            "DEPARTMENT_NOT_FOUND",
            format!("Department not found: {}", dept_no),
            format!("The department '{}' is not part of the loaded snapshot", dept_no),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DashboardError> for ApiErrorResponse {
    fn from(error: DashboardError) -> Self {
        match error {
            DashboardError::DepartmentNotFound { dept_no } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::department_not_found(&dept_no),
            },
            DashboardError::ConfigNotFound { .. }
            | DashboardError::ConfigParseError { .. }
            | DashboardError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    error.to_string(),
                ),
            },
            DashboardError::SnapshotNotFound { .. } | DashboardError::SnapshotParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "SNAPSHOT_ERROR",
                        "Snapshot error",
                        error.to_string(),
                    ),
                }
            }
        }
    }
}
