use super::{ApprovalStatus, HourReport, HourReportPatch, HourReportView, NewHourReport};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for hour reports
///
/// Reads return joined views; writes return the bare stored row.
/// Every write is a single statement and last write wins.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait HourReportRepository: Send + Sync {
    /// All reports, newest first by creation time
    async fn find_all(&self) -> Result<Vec<HourReportView>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<HourReportView>, DomainError>;

    /// Reports logged by one employee, newest first
    async fn find_by_documento(&self, documento_id: i64)
    -> Result<Vec<HourReportView>, DomainError>;

    /// Reports charged to one company PEP code, newest first
    async fn find_by_cliente(&self, cliente: &str) -> Result<Vec<HourReportView>, DomainError>;

    async fn find_by_status(
        &self,
        status: ApprovalStatus,
    ) -> Result<Vec<HourReportView>, DomainError>;

    async fn create(&self, report: &NewHourReport) -> Result<HourReport, DomainError>;

    /// Writes only the supplied fields. `None` when no row has `id`.
    async fn update(
        &self,
        id: i32,
        patch: &HourReportPatch,
    ) -> Result<Option<HourReport>, DomainError>;

    async fn set_status(
        &self,
        id: i32,
        status: ApprovalStatus,
    ) -> Result<Option<HourReport>, DomainError>;

    /// Removes the row and returns its prior contents
    async fn delete(&self, id: i32) -> Result<Option<HourReport>, DomainError>;
}
