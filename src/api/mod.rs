//! HTTP API module for the employee dashboard.
//!
//! This module exposes the department queries as JSON endpoints for the
//! presentation layer: department listing, gender counts, average salary,
//! salary histogram, and a combined per-department summary.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse, AverageSalaryResponse, HealthResponse, HistogramEntry};
pub use state::AppState;
