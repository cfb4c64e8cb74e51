use super::{AreaEnCompany, AreaPatch, AreaView, NewArea};
use crate::DomainError;
use async_trait::async_trait;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait AreaRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<AreaView>, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<AreaView>, DomainError>;
    /// Areas offered by one company
    async fn find_by_company(&self, company_id: i32) -> Result<Vec<AreaView>, DomainError>;
    async fn create(&self, area: &NewArea) -> Result<AreaEnCompany, DomainError>;
    async fn update(&self, id: i32, patch: &AreaPatch)
    -> Result<Option<AreaEnCompany>, DomainError>;
    async fn delete(&self, id: i32) -> Result<Option<AreaEnCompany>, DomainError>;
}
