//! The joined department/employee/salary row produced by the join builder.

use super::{DeptEmp, Employee, Salary};

/// One `DeptEmp ⋈ Employee ⋈ Salary` match.
///
/// Borrows its parts from the snapshot, so it only lives for the duration of
/// a single aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedRecord<'a> {
    /// The department membership row.
    pub dept_emp: &'a DeptEmp,
    /// The employee the membership refers to.
    pub employee: &'a Employee,
    /// A current salary row of that employee.
    pub salary: &'a Salary,
}
