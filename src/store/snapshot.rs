//! The read-only, in-memory record snapshot.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::models::{Department, DeptEmp, Employee, Salary};

/// The four relational tables as loaded from the backing source.
#[derive(Debug, Clone, Default)]
pub struct SnapshotTables {
    /// Rows of the departments table, in source order.
    pub departments: Vec<Department>,
    /// Rows of the dept_emp table.
    pub dept_emp: Vec<DeptEmp>,
    /// Rows of the employees table.
    pub employees: Vec<Employee>,
    /// Rows of the salaries table.
    pub salaries: Vec<Salary>,
}

/// Row counts of a loaded snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotStats {
    /// Number of departments.
    pub departments: usize,
    /// Number of employees.
    pub employees: usize,
    /// Number of dept_emp rows.
    pub dept_emp: usize,
    /// Number of salary rows.
    pub salaries: usize,
    /// dept_emp rows that reference no employee.
    pub orphan_dept_emp: usize,
    /// Salary rows that reference no employee.
    pub orphan_salaries: usize,
}

/// An immutable snapshot of the employee tables, indexed for the department join.
///
/// The current date is fixed when the store is built and never re-evaluated,
/// so every query against one store agrees on which salaries are current.
///
/// # Example
///
/// ```
/// use employee_dashboard::store::{RecordStore, SnapshotTables};
/// use chrono::NaiveDate;
///
/// let store = RecordStore::from_tables(
///     SnapshotTables::default(),
///     NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
/// );
/// assert!(store.departments().is_empty());
/// assert_eq!(store.dept_members("d001").count(), 0);
/// ```
#[derive(Debug)]
pub struct RecordStore {
    tables: SnapshotTables,
    current_date: NaiveDate,
    employee_index: HashMap<i32, usize>,
    salary_index: HashMap<i32, Vec<usize>>,
    dept_emp_index: HashMap<String, Vec<usize>>,
    stats: SnapshotStats,
}

impl RecordStore {
    /// Builds the store and its lookup indexes.
    ///
    /// Rows referencing an unknown employee are kept but never joined;
    /// they are counted in [`SnapshotStats`] and reported once here.
    pub fn from_tables(tables: SnapshotTables, current_date: NaiveDate) -> Self {
        let employee_index: HashMap<i32, usize> = tables
            .employees
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.emp_no, idx))
            .collect();

        let mut salary_index: HashMap<i32, Vec<usize>> = HashMap::new();
        for (idx, salary) in tables.salaries.iter().enumerate() {
            salary_index.entry(salary.emp_no).or_default().push(idx);
        }

        let mut dept_emp_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, dept_emp) in tables.dept_emp.iter().enumerate() {
            dept_emp_index
                .entry(dept_emp.dept_no.clone())
                .or_default()
                .push(idx);
        }

        let orphan_dept_emp = tables
            .dept_emp
            .iter()
            .filter(|de| !employee_index.contains_key(&de.emp_no))
            .count();
        let orphan_salaries = tables
            .salaries
            .iter()
            .filter(|s| !employee_index.contains_key(&s.emp_no))
            .count();

        let stats = SnapshotStats {
            departments: tables.departments.len(),
            employees: tables.employees.len(),
            dept_emp: tables.dept_emp.len(),
            salaries: tables.salaries.len(),
            orphan_dept_emp,
            orphan_salaries,
        };

        if orphan_dept_emp > 0 || orphan_salaries > 0 {
            warn!(
                orphan_dept_emp,
                orphan_salaries, "Snapshot rows reference unknown employees and will not be joined"
            );
        }
        info!(
            departments = stats.departments,
            employees = stats.employees,
            dept_emp = stats.dept_emp,
            salaries = stats.salaries,
            current_date = %current_date,
            "Record snapshot ready"
        );

        Self {
            tables,
            current_date,
            employee_index,
            salary_index,
            dept_emp_index,
            stats,
        }
    }

    /// The date salaries are compared against, fixed at load.
    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// Row counts of this snapshot.
    pub fn stats(&self) -> SnapshotStats {
        self.stats
    }

    /// All departments, in load order.
    pub fn departments(&self) -> &[Department] {
        &self.tables.departments
    }

    /// Finds a department by number.
    pub fn department(&self, dept_no: &str) -> Option<&Department> {
        self.tables
            .departments
            .iter()
            .find(|d| d.dept_no == dept_no)
    }

    /// The department selected when the dashboard opens: the first one loaded.
    pub fn default_department(&self) -> Option<&Department> {
        self.tables.departments.first()
    }

    /// Looks up an employee by number.
    pub fn employee(&self, emp_no: i32) -> Option<&Employee> {
        self.employee_index
            .get(&emp_no)
            .map(|&idx| &self.tables.employees[idx])
    }

    /// All salary rows of an employee, historical ones included.
    pub fn salaries_of(&self, emp_no: i32) -> impl Iterator<Item = &Salary> + '_ {
        self.salary_index
            .get(&emp_no)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.tables.salaries[idx])
    }

    /// All dept_emp rows of a department. Empty for an unknown department.
    pub fn dept_members<'a>(
        &'a self,
        dept_no: &str,
    ) -> impl Iterator<Item = &'a DeptEmp> + use<'a> {
        self.dept_emp_index
            .get(dept_no)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.tables.dept_emp[idx])
    }
}
