use super::error::store_error;
use super::patch::build_update;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use domain::report::{
    ApprovalStatus, HourReport, HourReportPatch, HourReportRepository, HourReportView,
    NewHourReport,
};
use domain::{DomainError, Patch};
use sqlx::{FromRow, PgPool};

const SELECT_VIEW: &str = r#"
    SELECT r.id, r.created_at, r.horas, r.fecha_trabajada, r.cliente,
           r.documento_id, r.area_trabajo, r.aprobado,
           c.nombre_company, a.nombre_area
    FROM reportes r
    LEFT JOIN companies c ON c.elemento_pep = r.cliente
    LEFT JOIN areas_trabajos a ON a.id::text = r.area_trabajo
"#;

#[derive(Debug, FromRow)]
struct ReportRow {
    id: i32,
    created_at: DateTime<Utc>,
    horas: f64,
    fecha_trabajada: Option<NaiveDate>,
    cliente: String,
    documento_id: i64,
    area_trabajo: Option<String>,
    aprobado: i16,
}

impl ReportRow {
    fn into_domain(self) -> Result<HourReport, DomainError> {
        Ok(HourReport {
            id: self.id,
            created_at: self.created_at,
            horas: self.horas,
            fecha_trabajada: self.fecha_trabajada,
            cliente: self.cliente,
            documento_id: self.documento_id,
            area_trabajo: self.area_trabajo,
            aprobado: ApprovalStatus::try_from(self.aprobado)
                .map_err(|e| DomainError::Store(e.to_string()))?,
        })
    }
}

#[derive(Debug, FromRow)]
struct ReportViewRow {
    #[sqlx(flatten)]
    report: ReportRow,
    nombre_company: Option<String>,
    nombre_area: Option<String>,
}

impl ReportViewRow {
    fn into_domain(self) -> Result<HourReportView, DomainError> {
        Ok(HourReportView {
            report: self.report.into_domain()?,
            nombre_company: self.nombre_company,
            nombre_area: self.nombre_area,
        })
    }
}

fn views(rows: Vec<ReportViewRow>) -> Result<Vec<HourReportView>, DomainError> {
    rows.into_iter().map(ReportViewRow::into_domain).collect()
}

/// PostgreSQL implementation of HourReportRepository
pub struct PostgresReportRepository {
    pool: PgPool,
}

impl PostgresReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HourReportRepository for PostgresReportRepository {
    async fn find_all(&self) -> Result<Vec<HourReportView>, DomainError> {
        let sql = format!("{} ORDER BY r.created_at DESC", SELECT_VIEW);
        let rows = sqlx::query_as::<_, ReportViewRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        views(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<HourReportView>, DomainError> {
        let sql = format!("{} WHERE r.id = $1", SELECT_VIEW);
        sqlx::query_as::<_, ReportViewRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?
            .map(ReportViewRow::into_domain)
            .transpose()
    }

    async fn find_by_documento(
        &self,
        documento_id: i64,
    ) -> Result<Vec<HourReportView>, DomainError> {
        let sql = format!(
            "{} WHERE r.documento_id = $1 ORDER BY r.created_at DESC",
            SELECT_VIEW
        );
        let rows = sqlx::query_as::<_, ReportViewRow>(&sql)
            .bind(documento_id)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        views(rows)
    }

    async fn find_by_cliente(&self, cliente: &str) -> Result<Vec<HourReportView>, DomainError> {
        let sql = format!(
            "{} WHERE r.cliente = $1 ORDER BY r.created_at DESC",
            SELECT_VIEW
        );
        let rows = sqlx::query_as::<_, ReportViewRow>(&sql)
            .bind(cliente)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        views(rows)
    }

    async fn find_by_status(
        &self,
        status: ApprovalStatus,
    ) -> Result<Vec<HourReportView>, DomainError> {
        let sql = format!(
            "{} WHERE r.aprobado = $1 ORDER BY r.created_at DESC",
            SELECT_VIEW
        );
        let rows = sqlx::query_as::<_, ReportViewRow>(&sql)
            .bind(status.code())
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        views(rows)
    }

    async fn create(&self, report: &NewHourReport) -> Result<HourReport, DomainError> {
        sqlx::query_as::<_, ReportRow>(
            r#"
            INSERT INTO reportes (horas, fecha_trabajada, cliente, documento_id, area_trabajo)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(report.horas)
        .bind(report.fecha_trabajada)
        .bind(&report.cliente)
        .bind(report.documento_id)
        .bind(&report.area_trabajo)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?
        .into_domain()
    }

    async fn update(
        &self,
        id: i32,
        patch: &HourReportPatch,
    ) -> Result<Option<HourReport>, DomainError> {
        build_update("reportes", patch.changes(), id, "*")
            .build_query_as::<ReportRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?
            .map(ReportRow::into_domain)
            .transpose()
    }

    async fn set_status(
        &self,
        id: i32,
        status: ApprovalStatus,
    ) -> Result<Option<HourReport>, DomainError> {
        let sql = "UPDATE reportes SET aprobado = $1 WHERE id = $2 RETURNING *";
        sqlx::query_as::<_, ReportRow>(sql)
            .bind(status.code())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?
            .map(ReportRow::into_domain)
            .transpose()
    }

    async fn delete(&self, id: i32) -> Result<Option<HourReport>, DomainError> {
        sqlx::query_as::<_, ReportRow>("DELETE FROM reportes WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?
            .map(ReportRow::into_domain)
            .transpose()
    }
}
