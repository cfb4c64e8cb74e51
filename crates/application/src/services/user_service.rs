use crate::params::parse_documento;
use crate::session::password::hash_password;
use domain::user::{NewUser, User, UserPatch, UserRepository, normalize_email};
use domain::{DomainError, Result};
use std::sync::Arc;
use tracing::info;

const NOT_FOUND: &str = "Usuario no encontrado";

/// User accounts. Passwords are hashed here; repositories only ever see hashes.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<User>> {
        self.repo.find_by_id(id).await
    }

    pub async fn by_documento(&self, documento: &str) -> Result<Option<User>> {
        let documento_id = parse_documento(documento)?;
        self.repo.find_by_documento(documento_id).await
    }

    pub async fn create(&self, mut user: NewUser) -> Result<User> {
        user.validate()?;
        user.email = user.email.as_deref().map(normalize_email);
        user.password = hash_password(&user.password)?;
        let created = self.repo.create(&user).await?;
        info!(id = created.id, rol = created.rol, "User created");
        Ok(created)
    }

    pub async fn update(&self, id: i32, mut patch: UserPatch) -> Result<User> {
        patch.validate()?;
        if let Some(Some(email)) = &mut patch.email {
            *email = normalize_email(email);
        }
        if let Some(password) = patch.password.take() {
            patch.password = Some(hash_password(&password)?);
        }
        self.repo
            .update(id, &patch)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }

    pub async fn delete(&self, id: i32) -> Result<User> {
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;
        info!(id, "User deleted");
        Ok(deleted)
    }
}
