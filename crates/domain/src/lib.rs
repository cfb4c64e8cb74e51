//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Entities (HourReport, Company, AreaEnCompany, User)
//! - Typed partial updates
//! - Repository interfaces (traits)
//! - The payroll distribution engine and its CSV export
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Validation enforced at domain level, before any store access
//! - Testable in isolation

pub mod area;
pub mod company;
pub mod distribution;
pub mod error;
pub mod patch;
pub mod report;
pub mod user;

// Re-export commonly used types
pub use distribution::{DateRange, DistributionError, PayrollDistribution};
pub use error::{DomainError, Result};
pub use patch::{FieldChange, FieldValue, NullKind, Patch};
pub use report::{ApprovalStatus, HourReport, HourReportView};
pub use user::{AuthMode, DashboardVariant, Role, User};
