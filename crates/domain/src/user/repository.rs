use super::{NewUser, User, UserPatch};
use crate::DomainError;
use async_trait::async_trait;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;
    async fn find_by_documento(&self, documento_id: i64) -> Result<Option<User>, DomainError>;
    /// Lookup by the identifier an external identity provider hands back
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
    async fn update(&self, id: i32, patch: &UserPatch) -> Result<Option<User>, DomainError>;
    async fn delete(&self, id: i32) -> Result<Option<User>, DomainError>;
}
