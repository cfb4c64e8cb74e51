use domain::company::{Company, CompanyPatch, CompanyRepository, NewCompany};
use domain::{DomainError, Result};
use std::sync::Arc;
use tracing::info;

const NOT_FOUND: &str = "Compañía no encontrada";

pub struct CompanyService {
    repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(repo: Arc<dyn CompanyRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Company>> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Company>> {
        self.repo.find_by_id(id).await
    }

    pub async fn by_pep(&self, elemento_pep: &str) -> Result<Option<Company>> {
        let elemento_pep = elemento_pep.trim();
        if elemento_pep.is_empty() {
            return Err(DomainError::validation("El elemento PEP es obligatorio"));
        }
        self.repo.find_by_pep(elemento_pep).await
    }

    pub async fn create(&self, company: NewCompany) -> Result<Company> {
        company.validate()?;
        let created = self.repo.create(&company).await?;
        info!(id = created.id, elemento_pep = %created.elemento_pep, "Company created");
        Ok(created)
    }

    pub async fn update(&self, id: i32, patch: CompanyPatch) -> Result<Company> {
        patch.validate()?;
        self.repo
            .update(id, &patch)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }

    pub async fn delete(&self, id: i32) -> Result<Company> {
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;
        info!(id, "Company deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::company::MockCompanyRepository;

    #[tokio::test]
    async fn test_blank_pep_is_rejected_before_create() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_create().never();

        let service = CompanyService::new(Arc::new(repo));
        let company = NewCompany {
            nombre_company: "Acme".to_string(),
            elemento_pep: " ".to_string(),
        };
        assert!(matches!(
            service.create(company).await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_pep_surfaces_conflict() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_create()
            .returning(|_| Err(DomainError::Conflict("PEP-1 ya existe".to_string())));

        let service = CompanyService::new(Arc::new(repo));
        let company = NewCompany {
            nombre_company: "Acme".to_string(),
            elemento_pep: "PEP-1".to_string(),
        };
        assert!(matches!(
            service.create(company).await,
            Err(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_patch_never_reaches_store() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_update().never();

        let service = CompanyService::new(Arc::new(repo));
        assert!(service.update(1, CompanyPatch::default()).await.is_err());
    }
}
