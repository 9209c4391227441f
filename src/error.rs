//! Error types for the employee dashboard.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration and
//! the record snapshot, or while answering department queries.

use thiserror::Error;

/// The main error type for the employee dashboard.
///
/// Unknown departments are not an error for the raw queries (they yield empty
/// results); [`DashboardError::DepartmentNotFound`] is only raised where a
/// department record itself is required, such as building a summary.
///
/// # Example
///
/// ```
/// use employee_dashboard::error::DashboardError;
///
/// let error = DashboardError::SnapshotNotFound {
///     path: "/missing/employees.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Snapshot table not found: /missing/employees.yaml");
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A snapshot table file was not found.
    #[error("Snapshot table not found: {path}")]
    SnapshotNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A snapshot table file could not be parsed.
    #[error("Failed to parse snapshot table '{path}': {message}")]
    SnapshotParseError {
        /// The path to the table that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested department does not exist in the snapshot.
    #[error("Department not found: {dept_no}")]
    DepartmentNotFound {
        /// The department number that was requested.
        dept_no: String,
    },
}

/// A type alias for Results that return DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;
