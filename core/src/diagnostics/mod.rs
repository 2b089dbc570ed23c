//! Findings produced by reflection and lint, and how they are reported.
pub mod reporter;
pub mod warning;

pub use reporter::{StrictViolation, WarningDestination, check_strict, report_warnings};
pub use warning::{Severity, Warning};
