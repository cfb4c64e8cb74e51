//! Payroll distribution of approved hours over a date range.

mod csv;
mod engine;
mod error;
mod range;

pub use csv::CSV_HEADER;
pub use engine::{CompanySummary, EmployeeHours, PayrollDistribution, aggregate};
pub use error::DistributionError;
pub use range::DateRange;
