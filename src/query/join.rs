//! Department join builder.
//!
//! This module produces the `DeptEmp ⋈ Employee ⋈ Salary` rows for one
//! department, restricted to salaries that are current on the store's
//! snapshot date. Rows whose employee is missing are dropped by the inner
//! join, and historical salaries are filtered out so each employee counts
//! once.

use rayon::prelude::*;

use crate::models::{DeptEmp, JoinedRecord};
use crate::store::RecordStore;

/// Joins one dept_emp row with its employee and that employee's current salaries.
fn join_member<'a>(
    store: &'a RecordStore,
    dept_emp: &'a DeptEmp,
) -> impl Iterator<Item = JoinedRecord<'a>> + use<'a> {
    let today = store.current_date();
    store
        .employee(dept_emp.emp_no)
        .into_iter()
        .flat_map(move |employee| {
            store
                .salaries_of(employee.emp_no)
                .filter(move |salary| salary.is_current(today))
                .map(move |salary| JoinedRecord {
                    dept_emp,
                    employee,
                    salary,
                })
        })
}

/// Returns the joined rows of a department, sequentially.
///
/// An unknown department yields an empty sequence.
///
/// # Example
///
/// ```
/// use employee_dashboard::query::joined;
/// use employee_dashboard::store::{RecordStore, SnapshotTables};
/// use chrono::NaiveDate;
///
/// let store = RecordStore::from_tables(
///     SnapshotTables::default(),
///     NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
/// );
/// assert_eq!(joined(&store, "d001").count(), 0);
/// ```
pub fn joined<'a>(
    store: &'a RecordStore,
    dept_no: &str,
) -> impl Iterator<Item = JoinedRecord<'a>> + use<'a> {
    store
        .dept_members(dept_no)
        .flat_map(move |dept_emp| join_member(store, dept_emp))
}

/// Returns the joined rows of a department as a rayon parallel iterator.
///
/// Produces the same rows as [`joined`], in no particular order.
pub fn par_joined<'a>(
    store: &'a RecordStore,
    dept_no: &str,
) -> impl ParallelIterator<Item = JoinedRecord<'a>> + use<'a> {
    let members: Vec<&'a DeptEmp> = store.dept_members(dept_no).collect();
    members
        .into_par_iter()
        .flat_map_iter(move |dept_emp| join_member(store, dept_emp))
}
