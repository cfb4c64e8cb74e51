//! Parsing of raw path segments into typed keys.

use domain::{DomainError, Result};

pub fn parse_id(raw: &str) -> Result<i32> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation("El id debe ser un número válido"))
}

pub fn parse_documento(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation("El documento debe ser un número válido"))
}
