//! One-time bulk load of the snapshot tables.
//!
//! This module provides the [`SnapshotLoader`] type, which reads the four
//! tables from YAML files in a snapshot directory and builds a [`RecordStore`].

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::error::{DashboardError, DashboardResult};

use super::snapshot::{RecordStore, SnapshotTables};

/// File name of the departments table.
pub const DEPARTMENTS_FILE: &str = "departments.yaml";
/// File name of the dept_emp table.
pub const DEPT_EMP_FILE: &str = "dept_emp.yaml";
/// File name of the employees table.
pub const EMPLOYEES_FILE: &str = "employees.yaml";
/// File name of the salaries table.
pub const SALARIES_FILE: &str = "salaries.yaml";

/// Loads a snapshot directory into a [`RecordStore`].
///
/// # Directory Structure
///
/// ```text
/// data/sample/
/// ├── departments.yaml  # dept_no, dept_name
/// ├── dept_emp.yaml     # emp_no, dept_no, from_date, to_date
/// ├── employees.yaml    # emp_no, birth_date, first_name, last_name, gender, hire_date
/// └── salaries.yaml     # emp_no, salary, from_date, to_date
/// ```
///
/// Each file is a YAML sequence of rows.
///
/// # Example
///
/// ```no_run
/// use employee_dashboard::store::SnapshotLoader;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
/// let store = SnapshotLoader::load("./data/sample", today)?;
/// println!("{} departments", store.departments().len());
/// # Ok::<(), employee_dashboard::error::DashboardError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Reads all four tables and builds the store with `current_date` fixed.
    ///
    /// Fails on the first missing or unparsable table; nothing is retried.
    pub fn load<P: AsRef<Path>>(path: P, current_date: NaiveDate) -> DashboardResult<RecordStore> {
        let path = path.as_ref();
        let start_time = Instant::now();

        let tables = SnapshotTables {
            departments: Self::load_table(&path.join(DEPARTMENTS_FILE))?,
            dept_emp: Self::load_table(&path.join(DEPT_EMP_FILE))?,
            employees: Self::load_table(&path.join(EMPLOYEES_FILE))?,
            salaries: Self::load_table(&path.join(SALARIES_FILE))?,
        };

        info!(
            snapshot_dir = %path.display(),
            duration_us = start_time.elapsed().as_micros(),
            "Snapshot tables loaded"
        );

        Ok(RecordStore::from_tables(tables, current_date))
    }

    /// Loads and parses one table file.
    fn load_table<T: serde::de::DeserializeOwned>(path: &Path) -> DashboardResult<Vec<T>> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DashboardError::SnapshotNotFound {
            path: path_str.clone(),
        })?;

        // An empty file is an empty table.
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_yaml::from_str(&content).map_err(|e| DashboardError::SnapshotParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
