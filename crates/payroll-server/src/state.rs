use application::{
    AreaService, AuthService, CompanyService, DistributionService, ReportService, UserService,
};
use domain::area::AreaRepository;
use domain::company::CompanyRepository;
use domain::report::HourReportRepository;
use domain::user::{AuthMode, UserRepository};
use infrastructure::{
    InMemoryStore, PostgresAreaRepository, PostgresCompanyRepository, PostgresReportRepository,
    PostgresUserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Services shared by every request
pub struct AppState {
    pub reports: ReportService,
    pub companies: CompanyService,
    pub areas: AreaService,
    pub users: UserService,
    pub distribution: DistributionService,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(
        reports: Arc<dyn HourReportRepository>,
        companies: Arc<dyn CompanyRepository>,
        areas: Arc<dyn AreaRepository>,
        users: Arc<dyn UserRepository>,
        auth_mode: AuthMode,
    ) -> Self {
        Self {
            reports: ReportService::new(reports.clone()),
            companies: CompanyService::new(companies.clone()),
            areas: AreaService::new(areas),
            users: UserService::new(users.clone()),
            distribution: DistributionService::new(reports, companies, users.clone()),
            auth: AuthService::new(users, auth_mode),
        }
    }

    pub fn postgres(pool: PgPool, auth_mode: AuthMode) -> Self {
        Self::new(
            Arc::new(PostgresReportRepository::new(pool.clone())),
            Arc::new(PostgresCompanyRepository::new(pool.clone())),
            Arc::new(PostgresAreaRepository::new(pool.clone())),
            Arc::new(PostgresUserRepository::new(pool)),
            auth_mode,
        )
    }

    pub fn in_memory(store: Arc<InMemoryStore>, auth_mode: AuthMode) -> Self {
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            auth_mode,
        )
    }
}
