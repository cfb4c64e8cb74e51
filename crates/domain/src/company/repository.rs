use super::{Company, CompanyPatch, NewCompany};
use crate::DomainError;
use async_trait::async_trait;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Company>, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DomainError>;
    async fn find_by_pep(&self, elemento_pep: &str) -> Result<Option<Company>, DomainError>;
    async fn create(&self, company: &NewCompany) -> Result<Company, DomainError>;
    async fn update(&self, id: i32, patch: &CompanyPatch)
    -> Result<Option<Company>, DomainError>;
    async fn delete(&self, id: i32) -> Result<Option<Company>, DomainError>;
}
