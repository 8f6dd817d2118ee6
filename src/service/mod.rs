//! Data-integrity layer behind the HTTP handlers.
//!
//! [`EmployeeDirectory`] owns employees and cascades deletions into the
//! [`AttendanceLedger`] on one transaction; the ledger only accepts a mark
//! whose insert statement itself finds the employee row.

pub mod directory;
pub mod ledger;

pub use directory::EmployeeDirectory;
pub use ledger::AttendanceLedger;
