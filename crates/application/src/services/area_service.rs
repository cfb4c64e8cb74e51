use crate::params::parse_id;
use domain::area::{AreaEnCompany, AreaPatch, AreaRepository, AreaView, NewArea};
use domain::{DomainError, Result};
use std::sync::Arc;
use tracing::info;

const NOT_FOUND: &str = "Área no encontrada";

pub struct AreaService {
    repo: Arc<dyn AreaRepository>,
}

impl AreaService {
    pub fn new(repo: Arc<dyn AreaRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<AreaView>> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<AreaView>> {
        self.repo.find_by_id(id).await
    }

    /// Areas of one company. `company` is the raw path segment.
    pub async fn by_company(&self, company: &str) -> Result<Vec<AreaView>> {
        let company_id = parse_id(company)?;
        self.repo.find_by_company(company_id).await
    }

    pub async fn create(&self, area: NewArea) -> Result<AreaEnCompany> {
        area.validate()?;
        let created = self.repo.create(&area).await?;
        info!(
            id = created.id,
            company_id = created.company_id,
            "Area created"
        );
        Ok(created)
    }

    pub async fn update(&self, id: i32, patch: AreaPatch) -> Result<AreaEnCompany> {
        patch.validate()?;
        self.repo
            .update(id, &patch)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }

    pub async fn delete(&self, id: i32) -> Result<AreaEnCompany> {
        self.repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }
}
