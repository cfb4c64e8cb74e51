//! Per-session dashboard state.
//!
//! Each dashboard is a plain value updated by a pure `reduce` that returns a
//! new snapshot. [`DashboardLoader`] performs the service calls and feeds
//! their results back as actions.

mod admin;
mod coordinator;
mod loader;
mod operative;

pub use admin::{AdminAction, AdminDashboard, AdminTab, ClientEntry};
pub use coordinator::{CoordinatorAction, CoordinatorDashboard};
pub use loader::DashboardLoader;
pub use operative::{OperativeAction, OperativeDashboard};

use crate::session::Session;
use domain::user::DashboardVariant;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum Dashboard {
    Operative(OperativeDashboard),
    Coordinator(CoordinatorDashboard),
    Admin(AdminDashboard),
}

impl Dashboard {
    /// Empty dashboard of the variant the session's role selects
    pub fn mount(session: &Session) -> Self {
        match session.dashboard {
            DashboardVariant::Operative => {
                Self::Operative(OperativeDashboard::new(session.documento_id))
            }
            DashboardVariant::Coordinator => {
                Self::Coordinator(CoordinatorDashboard::new(session.documento_id))
            }
            DashboardVariant::Administrative => Self::Admin(AdminDashboard::new()),
        }
    }

    pub fn variant(&self) -> DashboardVariant {
        match self {
            Self::Operative(_) => DashboardVariant::Operative,
            Self::Coordinator(_) => DashboardVariant::Coordinator,
            Self::Admin(_) => DashboardVariant::Administrative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(dashboard: DashboardVariant) -> Session {
        Session {
            user_id: 1,
            documento_id: 123456,
            nombre_usuario: "Usuario".to_string(),
            rol: 0,
            dashboard,
        }
    }

    #[test]
    fn test_mount_follows_session_variant() {
        for variant in [
            DashboardVariant::Operative,
            DashboardVariant::Coordinator,
            DashboardVariant::Administrative,
        ] {
            assert_eq!(Dashboard::mount(&session(variant)).variant(), variant);
        }
    }

    #[test]
    fn test_mounted_operative_dashboard_is_scoped_to_session() {
        match Dashboard::mount(&session(DashboardVariant::Operative)) {
            Dashboard::Operative(dashboard) => assert_eq!(dashboard.documento_id, 123456),
            other => panic!("unexpected dashboard {:?}", other),
        }
    }
}
