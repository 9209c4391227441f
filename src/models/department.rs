//! Department and department membership rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the departments table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department number (primary key, e.g. "d005").
    pub dept_no: String,
    /// Human-readable department name.
    pub dept_name: String,
}

/// A row of the dept_emp association table, linking an employee to a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeptEmp {
    /// The employee this membership belongs to.
    pub emp_no: i32,
    /// The department the employee belongs to.
    pub dept_no: String,
    /// First day of membership.
    pub from_date: NaiveDate,
    /// Last day of membership.
    pub to_date: NaiveDate,
}
