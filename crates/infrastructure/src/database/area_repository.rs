use super::error::store_error;
use super::patch::build_update;
use async_trait::async_trait;
use domain::area::{AreaEnCompany, AreaPatch, AreaRepository, AreaView, NewArea};
use domain::{DomainError, Patch};
use sqlx::{FromRow, PgPool};

const SELECT_VIEW: &str = r#"
    SELECT a.id, a.nombre_area, a.area_cliente, a.company_id, c.nombre_company
    FROM areas_trabajos a
    LEFT JOIN companies c ON c.id = a.company_id
"#;

#[derive(Debug, FromRow)]
struct AreaRow {
    id: i32,
    nombre_area: String,
    area_cliente: Option<i32>,
    company_id: i32,
}

impl From<AreaRow> for AreaEnCompany {
    fn from(row: AreaRow) -> Self {
        Self {
            id: row.id,
            nombre_area: row.nombre_area,
            area_cliente: row.area_cliente,
            company_id: row.company_id,
        }
    }
}

#[derive(Debug, FromRow)]
struct AreaViewRow {
    #[sqlx(flatten)]
    area: AreaRow,
    nombre_company: Option<String>,
}

impl From<AreaViewRow> for AreaView {
    fn from(row: AreaViewRow) -> Self {
        Self {
            area: row.area.into(),
            nombre_company: row.nombre_company,
        }
    }
}

/// PostgreSQL implementation of AreaRepository
pub struct PostgresAreaRepository {
    pool: PgPool,
}

impl PostgresAreaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AreaRepository for PostgresAreaRepository {
    async fn find_all(&self) -> Result<Vec<AreaView>, DomainError> {
        let sql = format!("{} ORDER BY a.id", SELECT_VIEW);
        let rows = sqlx::query_as::<_, AreaViewRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(AreaView::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<AreaView>, DomainError> {
        let sql = format!("{} WHERE a.id = $1", SELECT_VIEW);
        let row = sqlx::query_as::<_, AreaViewRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.map(AreaView::from))
    }

    async fn find_by_company(&self, company_id: i32) -> Result<Vec<AreaView>, DomainError> {
        let sql = format!("{} WHERE a.company_id = $1 ORDER BY a.id", SELECT_VIEW);
        let rows = sqlx::query_as::<_, AreaViewRow>(&sql)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(AreaView::from).collect())
    }

    async fn create(&self, area: &NewArea) -> Result<AreaEnCompany, DomainError> {
        let row = sqlx::query_as::<_, AreaRow>(
            r#"
            INSERT INTO areas_trabajos (nombre_area, area_cliente, company_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&area.nombre_area)
        .bind(area.area_cliente)
        .bind(area.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: i32,
        patch: &AreaPatch,
    ) -> Result<Option<AreaEnCompany>, DomainError> {
        let row = build_update("areas_trabajos", patch.changes(), id, "*")
            .build_query_as::<AreaRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.map(AreaEnCompany::from))
    }

    async fn delete(&self, id: i32) -> Result<Option<AreaEnCompany>, DomainError> {
        let sql = "DELETE FROM areas_trabajos WHERE id = $1 RETURNING *";
        let row = sqlx::query_as::<_, AreaRow>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.map(AreaEnCompany::from))
    }
}
