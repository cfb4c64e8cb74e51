use domain::company::Company;
use domain::distribution::PayrollDistribution;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Upload,
    Clients,
    Distribution,
    Closure,
}

/// A client company with the names of the areas it offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientEntry {
    #[serde(flatten)]
    pub company: Company,
    pub areas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminDashboard {
    pub active_tab: AdminTab,
    pub clients: Vec<ClientEntry>,
    pub loading_clients: bool,
    pub distribution: Option<PayrollDistribution>,
    /// Informational message, e.g. an empty distribution range
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    SelectTab(AdminTab),
    ClientsRequested,
    ClientsLoaded(Vec<ClientEntry>),
    DistributionLoaded(PayrollDistribution),
    DistributionEmpty(String),
    Failed(String),
}

impl AdminDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&self, action: AdminAction) -> Self {
        let mut next = self.clone();
        match action {
            AdminAction::SelectTab(tab) => next.active_tab = tab,
            AdminAction::ClientsRequested => next.loading_clients = true,
            AdminAction::ClientsLoaded(clients) => {
                next.clients = clients;
                next.loading_clients = false;
                next.error = None;
            }
            AdminAction::DistributionLoaded(distribution) => {
                next.distribution = Some(distribution);
                next.notice = None;
                next.error = None;
            }
            AdminAction::DistributionEmpty(message) => {
                next.distribution = None;
                next.notice = Some(message);
            }
            AdminAction::Failed(message) => {
                next.loading_clients = false;
                next.error = Some(message);
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_loading_cycle() {
        let loading = AdminDashboard::new().reduce(AdminAction::ClientsRequested);
        assert!(loading.loading_clients);

        let loaded = loading.reduce(AdminAction::ClientsLoaded(vec![ClientEntry {
            company: Company {
                id: 1,
                nombre_company: "Acme".to_string(),
                elemento_pep: "PEP-1".to_string(),
            },
            areas: vec!["Desarrollo".to_string(), "Soporte".to_string()],
        }]));
        assert!(!loaded.loading_clients);
        assert_eq!(loaded.clients[0].areas.len(), 2);
    }

    #[test]
    fn test_empty_distribution_clears_previous_preview() {
        let dashboard = AdminDashboard::new()
            .reduce(AdminAction::SelectTab(AdminTab::Distribution))
            .reduce(AdminAction::DistributionEmpty(
                "No hay reportes aprobados".to_string(),
            ));

        assert_eq!(dashboard.active_tab, AdminTab::Distribution);
        assert!(dashboard.distribution.is_none());
        assert!(dashboard.notice.is_some());
    }
}
