//! Salary history rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the salaries table.
///
/// An employee has one row per salary period. Only the row whose validity
/// interval reaches the snapshot's current date counts as the current salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    /// The employee this salary belongs to.
    pub emp_no: i32,
    /// Yearly salary in whole currency units.
    pub salary: i32,
    /// First day this salary applied.
    pub from_date: NaiveDate,
    /// Last day this salary applied (`9999-01-01` for open-ended rows).
    pub to_date: NaiveDate,
}

impl Salary {
    /// Returns true if this salary is still valid on `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_dashboard::models::Salary;
    /// use chrono::NaiveDate;
    ///
    /// let salary = Salary {
    ///     emp_no: 10001,
    ///     salary: 88958,
    ///     from_date: NaiveDate::from_ymd_opt(2002, 6, 22).unwrap(),
    ///     to_date: NaiveDate::from_ymd_opt(9999, 1, 1).unwrap(),
    /// };
    /// assert!(salary.is_current(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()));
    /// ```
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.to_date >= today
    }
}
