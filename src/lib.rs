//! Employee dashboard over an in-memory snapshot of the employees database.
//!
//! This crate loads the departments, dept_emp, employees and salaries tables
//! once, and answers per-department questions about gender balance and
//! salary distribution: headcount by gender, average current salary, and a
//! gender by salary-bucket histogram.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod store;
