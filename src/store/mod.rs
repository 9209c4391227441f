//! The in-memory record store.
//!
//! This module holds the read-only snapshot of the departments, dept_emp,
//! employees and salaries tables, and the loader that builds it once at
//! startup. After loading, the store is shared behind an `Arc` and queried
//! without locking.

mod loader;
mod snapshot;

pub use loader::{DEPARTMENTS_FILE, DEPT_EMP_FILE, EMPLOYEES_FILE, SALARIES_FILE, SnapshotLoader};
pub use snapshot::{RecordStore, SnapshotStats, SnapshotTables};
