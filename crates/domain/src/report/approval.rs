use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Review state of an hour report, stored as the `aprobado` flag.
///
/// Only `Approved` reports take part in payroll distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn code(&self) -> i16 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Approved => "aprobado",
            Self::Rejected => "rechazado",
        }
    }

    /// Parses the path form used by `/reportes/estado/{estado}`
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.to_lowercase().as_str() {
            "pendiente" | "0" => Ok(Self::Pending),
            "aprobado" | "1" => Ok(Self::Approved),
            "rechazado" | "2" => Ok(Self::Rejected),
            other => Err(DomainError::Validation(format!(
                "Estado de aprobación desconocido: {other}"
            ))),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl From<ApprovalStatus> for i16 {
    fn from(status: ApprovalStatus) -> Self {
        status.code()
    }
}

impl TryFrom<i16> for ApprovalStatus {
    type Error = DomainError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Approved),
            2 => Ok(Self::Rejected),
            other => Err(DomainError::Validation(format!(
                "Valor de aprobado inválido: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
