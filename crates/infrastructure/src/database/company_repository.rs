use super::error::store_error;
use super::patch::build_update;
use async_trait::async_trait;
use domain::company::{Company, CompanyPatch, CompanyRepository, NewCompany};
use domain::{DomainError, Patch};
use sqlx::{FromRow, PgPool};

#[derive(Debug, FromRow)]
struct CompanyRow {
    id: i32,
    nombre_company: String,
    elemento_pep: String,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: row.id,
            nombre_company: row.nombre_company,
            elemento_pep: row.elemento_pep,
        }
    }
}

/// PostgreSQL implementation of CompanyRepository
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
        let rows = sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DomainError> {
        let row = sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.map(Company::from))
    }

    async fn find_by_pep(&self, elemento_pep: &str) -> Result<Option<Company>, DomainError> {
        let row =
            sqlx::query_as::<_, CompanyRow>("SELECT * FROM companies WHERE elemento_pep = $1")
                .bind(elemento_pep)
                .fetch_optional(&self.pool)
                .await
                .map_err(store_error)?;
        Ok(row.map(Company::from))
    }

    async fn create(&self, company: &NewCompany) -> Result<Company, DomainError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            "INSERT INTO companies (nombre_company, elemento_pep) VALUES ($1, $2) RETURNING *",
        )
        .bind(&company.nombre_company)
        .bind(&company.elemento_pep)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;
        Ok(row.into())
    }

    async fn update(&self, id: i32, patch: &CompanyPatch) -> Result<Option<Company>, DomainError> {
        let row = build_update("companies", patch.changes(), id, "*")
            .build_query_as::<CompanyRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.map(Company::from))
    }

    async fn delete(&self, id: i32) -> Result<Option<Company>, DomainError> {
        let row = sqlx::query_as::<_, CompanyRow>("DELETE FROM companies WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.map(Company::from))
    }
}
