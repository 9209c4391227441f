//! Core data models for the employee dashboard.
//!
//! This module contains the snapshot table rows and the aggregation
//! results built from them.

mod aggregates;
mod department;
mod employee;
mod joined;
mod salary;

pub use aggregates::{
    BUCKET_SIZE, DepartmentSummary, GenderBalance, GenderIntervalFrequency, SalaryDistribution,
    SeriesPoint, salary_bucket,
};
pub use department::{Department, DeptEmp};
pub use employee::{Employee, Gender};
pub use joined::JoinedRecord;
pub use salary::Salary;
