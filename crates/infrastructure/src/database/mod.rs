mod area_repository;
mod company_repository;
mod error;
mod migrations;
pub mod patch;
mod report_repository;
mod user_repository;

pub use area_repository::PostgresAreaRepository;
pub use company_repository::PostgresCompanyRepository;
pub use error::store_error;
pub use migrations::run_migrations;
pub use report_repository::PostgresReportRepository;
pub use user_repository::PostgresUserRepository;
