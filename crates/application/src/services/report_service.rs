use crate::params::parse_documento;
use domain::report::{
    ApprovalStatus, DailyHours, HourReport, HourReportPatch, HourReportRepository,
    HourReportView, NewHourReport, group_by_date,
};
use domain::{DomainError, Result};
use std::sync::Arc;
use tracing::{debug, info};

const NOT_FOUND: &str = "Reporte no encontrado";

/// Use cases over hour reports
pub struct ReportService {
    repo: Arc<dyn HourReportRepository>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn HourReportRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<HourReportView>> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<HourReportView>> {
        self.repo.find_by_id(id).await
    }

    /// Reports of one employee. `documento` is the raw path segment.
    pub async fn by_documento(&self, documento: &str) -> Result<Vec<HourReportView>> {
        let documento_id = parse_documento(documento)?;
        self.repo.find_by_documento(documento_id).await
    }

    pub async fn by_cliente(&self, cliente: &str) -> Result<Vec<HourReportView>> {
        let cliente = cliente.trim();
        if cliente.is_empty() {
            return Err(DomainError::validation("El cliente es obligatorio"));
        }
        self.repo.find_by_cliente(cliente).await
    }

    pub async fn by_status(&self, estado: &str) -> Result<Vec<HourReportView>> {
        let status = ApprovalStatus::parse(estado)?;
        self.repo.find_by_status(status).await
    }

    /// Hours of one employee grouped by day, newest first
    pub async fn history(&self, documento: &str) -> Result<Vec<DailyHours>> {
        let reports = self.by_documento(documento).await?;
        Ok(group_by_date(&reports))
    }

    pub async fn create(&self, report: NewHourReport) -> Result<HourReport> {
        report.validate()?;
        let created = self.repo.create(&report).await?;
        info!(
            id = created.id,
            documento_id = created.documento_id,
            cliente = %created.cliente,
            "Hour report created"
        );
        Ok(created)
    }

    pub async fn update(&self, id: i32, patch: HourReportPatch) -> Result<HourReport> {
        patch.validate()?;
        debug!(id, "Updating hour report");
        self.repo
            .update(id, &patch)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }

    pub async fn approve(&self, id: i32) -> Result<HourReport> {
        self.review(id, ApprovalStatus::Approved).await
    }

    pub async fn reject(&self, id: i32) -> Result<HourReport> {
        self.review(id, ApprovalStatus::Rejected).await
    }

    async fn review(&self, id: i32, status: ApprovalStatus) -> Result<HourReport> {
        let report = self
            .repo
            .set_status(id, status)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;
        info!(id, estado = %status, "Hour report reviewed");
        Ok(report)
    }

    pub async fn delete(&self, id: i32) -> Result<HourReport> {
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;
        info!(id, "Hour report deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use domain::report::MockHourReportRepository;
    use mockall::predicate::eq;

    fn stored(id: i32) -> HourReport {
        HourReport {
            id,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap(),
            horas: 4.0,
            fecha_trabajada: NaiveDate::from_ymd_opt(2025, 1, 14),
            cliente: "PEP-2".to_string(),
            documento_id: 1001,
            area_trabajo: Some("3".to_string()),
            aprobado: ApprovalStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_empty_patch_never_reaches_store() {
        let mut repo = MockHourReportRepository::new();
        repo.expect_update().never();

        let service = ReportService::new(Arc::new(repo));
        let err = service
            .update(1, HourReportPatch::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_non_numeric_documento_never_reaches_store() {
        let mut repo = MockHourReportRepository::new();
        repo.expect_find_by_documento().never();

        let service = ReportService::new(Arc::new(repo));
        let err = service.by_documento("12a").await.unwrap_err();

        assert_eq!(
            err,
            DomainError::Validation("El documento debe ser un número válido".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_passes_only_supplied_fields() {
        let mut repo = MockHourReportRepository::new();
        repo.expect_update()
            .withf(|id, patch| *id == 7 && patch.horas == Some(6.0) && patch.cliente.is_none())
            .times(1)
            .returning(|id, patch| {
                let mut report = stored(id);
                patch.apply_to(&mut report);
                Ok(Some(report))
            });

        let service = ReportService::new(Arc::new(repo));
        let patch = HourReportPatch {
            horas: Some(6.0),
            ..Default::default()
        };
        let updated = service.update(7, patch).await.unwrap();

        assert_eq!(updated.horas, 6.0);
        assert_eq!(updated.cliente, "PEP-2");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mut repo = MockHourReportRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = ReportService::new(Arc::new(repo));
        let patch = HourReportPatch {
            horas: Some(2.0),
            ..Default::default()
        };
        let err = service.update(99, patch).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound(NOT_FOUND.to_string()));
    }

    #[tokio::test]
    async fn test_invalid_hours_are_rejected_before_create() {
        let mut repo = MockHourReportRepository::new();
        repo.expect_create().never();

        let service = ReportService::new(Arc::new(repo));
        let report = NewHourReport {
            horas: -1.0,
            fecha_trabajada: None,
            cliente: "PEP-1".to_string(),
            documento_id: 1,
            area_trabajo: None,
        };
        assert!(service.create(report).await.is_err());
    }

    #[tokio::test]
    async fn test_approve_sets_approved_status() {
        let mut repo = MockHourReportRepository::new();
        repo.expect_set_status()
            .with(eq(3), eq(ApprovalStatus::Approved))
            .times(1)
            .returning(|id, status| {
                let mut report = stored(id);
                report.aprobado = status;
                Ok(Some(report))
            });

        let service = ReportService::new(Arc::new(repo));
        let report = service.approve(3).await.unwrap();
        assert!(report.aprobado.is_approved());
    }

    #[tokio::test]
    async fn test_unknown_status_is_rejected() {
        let mut repo = MockHourReportRepository::new();
        repo.expect_find_by_status().never();

        let service = ReportService::new(Arc::new(repo));
        assert!(service.by_status("borrador").await.is_err());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockHourReportRepository::new();
        repo.expect_delete().with(eq(5)).returning(|_| Ok(None));

        let service = ReportService::new(Arc::new(repo));
        let err = service.delete(5).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut repo = MockHourReportRepository::new();
        repo.expect_find_all()
            .returning(|| Err(DomainError::Store("connection refused".to_string())));

        let service = ReportService::new(Arc::new(repo));
        let err = service.list().await.unwrap_err();
        assert_eq!(err.to_string(), "Database error: connection refused");
    }

    #[tokio::test]
    async fn test_history_groups_by_day() {
        let mut repo = MockHourReportRepository::new();
        repo.expect_find_by_documento()
            .with(eq(1001))
            .returning(|_| Ok(vec![stored(1).into(), stored(2).into()]));

        let service = ReportService::new(Arc::new(repo));
        let days = service.history("1001").await.unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].total_horas, 8.0);
    }
}
