use serde::{Deserialize, Serialize};
use tracing::warn;

/// Closed set of roles a user account can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Operativo,
    Coordinador,
    Administrativo,
}

impl Role {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Operativo),
            2 => Some(Self::Coordinador),
            3 => Some(Self::Administrativo),
            _ => None,
        }
    }

    pub fn dashboard(&self) -> DashboardVariant {
        match self {
            Self::Operativo => DashboardVariant::Operative,
            Self::Coordinador => DashboardVariant::Coordinator,
            Self::Administrativo => DashboardVariant::Administrative,
        }
    }
}

/// Which dashboard a session mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardVariant {
    #[serde(rename = "operativo")]
    Operative,
    #[serde(rename = "coordinador")]
    Coordinator,
    #[serde(rename = "administrativo")]
    Administrative,
}

impl DashboardVariant {
    /// Maps a stored `rol` code. Codes outside the closed set mount the
    /// operative dashboard.
    pub fn for_role_code(code: i32) -> Self {
        match Role::from_code(code) {
            Some(role) => role.dashboard(),
            None => {
                warn!(
                    rol = code,
                    "Unmapped role code, falling back to operative dashboard"
                );
                Self::Operative
            }
        }
    }
}
