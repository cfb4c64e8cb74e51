use crate::DomainError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    #[error("No hay reportes aprobados en el rango de fechas seleccionado")]
    NoApprovedRecords { from: NaiveDate, to: NaiveDate },

    #[error("Rango de fechas inválido: {from} es posterior a {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },
}

impl From<DistributionError> for DomainError {
    fn from(err: DistributionError) -> Self {
        match err {
            DistributionError::NoApprovedRecords { .. } => Self::NotFound(err.to_string()),
            DistributionError::InvalidRange { .. } => Self::Validation(err.to_string()),
        }
    }
}
