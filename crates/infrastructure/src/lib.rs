//! Infrastructure layer - External integrations

pub mod config;
pub mod database;
pub mod memory;

pub use config::ServerConfig;
pub use database::{
    PostgresAreaRepository, PostgresCompanyRepository, PostgresReportRepository,
    PostgresUserRepository, run_migrations,
};
pub use memory::InMemoryStore;
