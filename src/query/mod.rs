//! Department queries for the employee dashboard.
//!
//! This module contains the join builder that produces the current
//! department/employee/salary rows, the three aggregators run over them
//! (headcount per gender, average salary, and the gender by salary-bucket
//! histogram), and the [`Dashboard`] facade that the HTTP layer calls.

mod aggregate;
mod dashboard;
mod display;
mod join;

pub use aggregate::{average_salary, count_by_gender, salary_histogram};
pub use dashboard::Dashboard;
pub use display::{format_count, format_currency};
pub use join::{joined, par_joined};
