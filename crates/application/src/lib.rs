//! Application layer - Use cases and business workflows

pub mod dashboard;
pub mod params;
pub mod services;
pub mod session;

pub use dashboard::{Dashboard, DashboardLoader};
pub use services::{AreaService, CompanyService, DistributionService, ReportService, UserService};
pub use session::{AuthService, Session, SessionOutcome};
