//! Employee model and related types.
//!
//! This module defines the Employee struct and Gender enum as they are
//! stored in the employees table of the snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Gender as recorded in the employees table.
///
/// Serialized as `"male"`/`"female"`; the relational enum spellings
/// `"M"`/`"F"` are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male employee.
    #[serde(alias = "M")]
    Male,
    /// Female employee.
    #[serde(alias = "F")]
    Female,
}

/// A row of the employees table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee number (primary key).
    pub emp_no: i32,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Recorded gender.
    pub gender: Gender,
    /// Date the employee was hired.
    pub hire_date: NaiveDate,
}
