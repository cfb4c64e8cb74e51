use super::{
    AdminAction, AdminDashboard, ClientEntry, CoordinatorAction, CoordinatorDashboard, Dashboard,
    OperativeAction, OperativeDashboard,
};
use crate::services::{AreaService, CompanyService, DistributionService, ReportService};
use domain::distribution::{DateRange, DistributionError};
use domain::report::NewHourReport;
use std::sync::Arc;
use tracing::{error, warn};

/// Runs the service calls behind dashboard interactions
pub struct DashboardLoader {
    reports: Arc<ReportService>,
    companies: Arc<CompanyService>,
    areas: Arc<AreaService>,
    distribution: Arc<DistributionService>,
}

impl DashboardLoader {
    pub fn new(
        reports: Arc<ReportService>,
        companies: Arc<CompanyService>,
        areas: Arc<AreaService>,
        distribution: Arc<DistributionService>,
    ) -> Self {
        Self {
            reports,
            companies,
            areas,
            distribution,
        }
    }

    /// Initial data of a freshly mounted dashboard
    pub async fn load(&self, dashboard: &Dashboard) -> Dashboard {
        match dashboard {
            Dashboard::Operative(d) => Dashboard::Operative(self.load_own(d).await),
            Dashboard::Coordinator(d) => {
                let next = CoordinatorDashboard {
                    own: self.load_own(&d.own).await,
                    ..d.clone()
                };
                let next = next.reduce(match self.reports.list().await {
                    Ok(queue) => CoordinatorAction::QueueLoaded(queue),
                    Err(e) => CoordinatorAction::Failed(failure(e)),
                });
                Dashboard::Coordinator(next)
            }
            Dashboard::Admin(d) => Dashboard::Admin(self.load_clients(d).await),
        }
    }

    pub async fn save_hours(
        &self,
        dashboard: &OperativeDashboard,
        report: NewHourReport,
    ) -> OperativeDashboard {
        dashboard.reduce(match self.reports.create(report).await {
            Ok(created) => OperativeAction::HoursSaved(created),
            Err(e) => OperativeAction::Failed(failure(e)),
        })
    }

    pub async fn review(
        &self,
        dashboard: &CoordinatorDashboard,
        id: i32,
        approve: bool,
    ) -> CoordinatorDashboard {
        let result = if approve {
            self.reports.approve(id).await
        } else {
            self.reports.reject(id).await
        };
        dashboard.reduce(match result {
            Ok(report) => CoordinatorAction::Reviewed(report),
            Err(e) => CoordinatorAction::Failed(failure(e)),
        })
    }

    /// Companies with their area names. A company whose areas fail to load is
    /// still listed, with no areas.
    pub async fn load_clients(&self, dashboard: &AdminDashboard) -> AdminDashboard {
        let loading = dashboard.reduce(AdminAction::ClientsRequested);
        let companies = match self.companies.list().await {
            Ok(companies) => companies,
            Err(e) => return loading.reduce(AdminAction::Failed(failure(e))),
        };

        let mut clients = Vec::with_capacity(companies.len());
        for company in companies {
            let areas = match self.areas.by_company(&company.id.to_string()).await {
                Ok(areas) => areas.into_iter().map(|a| a.area.nombre_area).collect(),
                Err(e) => {
                    warn!(company_id = company.id, "Failed to load areas: {}", e);
                    Vec::new()
                }
            };
            clients.push(ClientEntry { company, areas });
        }
        loading.reduce(AdminAction::ClientsLoaded(clients))
    }

    pub async fn load_distribution(
        &self,
        dashboard: &AdminDashboard,
        range: DateRange,
    ) -> AdminDashboard {
        dashboard.reduce(match self.distribution.generate(range).await {
            Ok(Some(distribution)) => AdminAction::DistributionLoaded(distribution),
            Ok(None) => AdminAction::DistributionEmpty(
                DistributionError::NoApprovedRecords {
                    from: range.from(),
                    to: range.to(),
                }
                .to_string(),
            ),
            Err(e) => AdminAction::Failed(failure(e)),
        })
    }

    async fn load_own(&self, dashboard: &OperativeDashboard) -> OperativeDashboard {
        let documento = dashboard.documento_id.to_string();
        dashboard.reduce(match self.reports.by_documento(&documento).await {
            Ok(records) => OperativeAction::RecordsLoaded(records),
            Err(e) => OperativeAction::Failed(failure(e)),
        })
    }
}

fn failure(err: domain::DomainError) -> String {
    if !err.is_client_error() {
        error!("Dashboard request failed: {}", err);
    }
    err.to_string()
}
