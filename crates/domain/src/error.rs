use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Client-caused input problem, detected before the store is touched
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Unique constraint violated in the store (e.g. a repeated elemento PEP)
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    /// Connectivity problem, malformed statement or any other store failure
    #[error("Database error: {0}")]
    Store(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display_keeps_message() {
        let err = DomainError::Store("connection refused".to_string());
        assert_eq!(err.to_string(), "Database error: connection refused");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_validation_display_is_raw_message() {
        let err = DomainError::validation("El documento debe ser un número válido");
        assert_eq!(err.to_string(), "El documento debe ser un número válido");
        assert!(err.is_client_error());
    }
}
