use domain::DomainError;

const UNIQUE_VIOLATION: &str = "23505";

/// Maps a driver error onto the domain taxonomy. Unique violations become
/// conflicts; everything else is a store failure with the message passed through.
pub fn store_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return DomainError::Conflict(format!("Registro duplicado: {}", db.message()));
        }
    }
    DomainError::Store(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_store_errors() {
        let err = store_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Store(_)));
        assert!(err.to_string().starts_with("Database error: "));
    }
}
