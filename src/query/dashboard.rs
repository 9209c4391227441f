//! The query interface the presentation layer calls.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    Department, DepartmentSummary, Gender, GenderBalance, GenderIntervalFrequency,
    SalaryDistribution,
};
use crate::store::RecordStore;

use super::aggregate::{average_salary, count_by_gender, salary_histogram};
use super::display::{format_count, format_currency};
use super::join::par_joined;

/// Department queries over a shared, immutable [`RecordStore`].
///
/// Every query builds its own joined stream, so results are a pure function
/// of the snapshot and the department number. Unknown departments yield
/// empty results rather than errors, except for [`Dashboard::summary`],
/// which needs the department record itself.
///
/// # Example
///
/// ```no_run
/// use employee_dashboard::query::Dashboard;
/// use employee_dashboard::store::SnapshotLoader;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
/// let dashboard = Dashboard::new(SnapshotLoader::load("./data/sample", today)?);
/// for department in dashboard.list_departments() {
///     println!("{}: {}", department.dept_name, dashboard.average_salary(&department.dept_no));
/// }
/// # Ok::<(), employee_dashboard::error::DashboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: Arc<RecordStore>,
}

impl Dashboard {
    /// Wraps a loaded store.
    pub fn new(store: RecordStore) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Wraps a store that is already shared.
    pub fn from_shared(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// The underlying snapshot.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// All departments, in load order.
    pub fn list_departments(&self) -> &[Department] {
        self.store.departments()
    }

    /// Headcount per gender among employees with a current salary.
    pub fn count_by_gender(&self, dept_no: &str) -> HashMap<Gender, u64> {
        let start_time = Instant::now();
        let counts = count_by_gender(par_joined(&self.store, dept_no));
        info!(
            dept_no,
            duration_us = start_time.elapsed().as_micros(),
            counts = ?counts,
            "Counted employees per gender"
        );
        counts
    }

    /// Mean current salary, zero when the department has no current salaries.
    pub fn average_salary(&self, dept_no: &str) -> Decimal {
        let average = average_salary(par_joined(&self.store, dept_no));
        debug!(dept_no, average = %average, "Computed average salary");
        average
    }

    /// Unsorted `(gender, salary bucket)` frequencies.
    pub fn salary_histogram(&self, dept_no: &str) -> Vec<GenderIntervalFrequency> {
        let histogram = salary_histogram(par_joined(&self.store, dept_no));
        debug!(dept_no, buckets = histogram.len(), "Computed salary histogram");
        histogram
    }

    /// Everything shown for a selected department.
    ///
    /// The three aggregations run concurrently on the rayon pool.
    pub fn summary(&self, dept_no: &str) -> DashboardResult<DepartmentSummary> {
        let department = self
            .store
            .department(dept_no)
            .cloned()
            .ok_or_else(|| DashboardError::DepartmentNotFound {
                dept_no: dept_no.to_string(),
            })?;

        let (counts, (average, histogram)) = rayon::join(
            || self.count_by_gender(dept_no),
            || {
                rayon::join(
                    || self.average_salary(dept_no),
                    || self.salary_histogram(dept_no),
                )
            },
        );

        let gender_balance = GenderBalance::from_counts(&counts);
        let headcount = counts.values().sum();

        Ok(DepartmentSummary {
            department,
            headcount,
            headcount_display: format_count(headcount),
            average_salary: average,
            average_salary_display: format_currency(average),
            gender_balance,
            salary_distribution: SalaryDistribution::from_histogram(&histogram),
        })
    }
}
