//! In-memory store for tests and local runs without a database.
//!
//! Emulates the joins and unique constraints of the PostgreSQL schema.

use async_trait::async_trait;
use chrono::Utc;
use domain::DomainError;
use domain::area::{AreaEnCompany, AreaPatch, AreaRepository, AreaView, NewArea};
use domain::company::{Company, CompanyPatch, CompanyRepository, NewCompany};
use domain::report::{
    ApprovalStatus, HourReport, HourReportPatch, HourReportRepository, HourReportView,
    NewHourReport,
};
use domain::user::{NewUser, User, UserPatch, UserRepository, normalize_email};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct Tables {
    companies: Vec<Company>,
    areas: Vec<AreaEnCompany>,
    users: Vec<User>,
    reports: Vec<HourReport>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn report_view(&self, report: &HourReport) -> HourReportView {
        HourReportView {
            report: report.clone(),
            nombre_company: self
                .companies
                .iter()
                .find(|c| c.elemento_pep == report.cliente)
                .map(|c| c.nombre_company.clone()),
            nombre_area: report.area_trabajo.as_ref().and_then(|area| {
                self.areas
                    .iter()
                    .find(|a| a.id.to_string() == *area)
                    .map(|a| a.nombre_area.clone())
            }),
        }
    }

    /// Newest first, like `ORDER BY created_at DESC`
    fn report_views(&self, keep: impl Fn(&HourReport) -> bool) -> Vec<HourReportView> {
        let mut views: Vec<_> = self
            .reports
            .iter()
            .filter(|r| keep(r))
            .map(|r| self.report_view(r))
            .collect();
        views.sort_by(|a, b| {
            b.report
                .created_at
                .cmp(&a.report.created_at)
                .then(b.report.id.cmp(&a.report.id))
        });
        views
    }

    fn area_view(&self, area: &AreaEnCompany) -> AreaView {
        AreaView {
            area: area.clone(),
            nombre_company: self
                .companies
                .iter()
                .find(|c| c.id == area.company_id)
                .map(|c| c.nombre_company.clone()),
        }
    }

    fn ensure_unique_pep(
        &self,
        elemento_pep: &str,
        except: Option<i32>,
    ) -> Result<(), DomainError> {
        if self
            .companies
            .iter()
            .any(|c| c.elemento_pep == elemento_pep && Some(c.id) != except)
        {
            return Err(duplicate("elemento_pep", elemento_pep));
        }
        Ok(())
    }

    fn ensure_unique_user(
        &self,
        documento_id: Option<i64>,
        email: Option<&str>,
        except: Option<i32>,
    ) -> Result<(), DomainError> {
        for user in self.users.iter().filter(|u| Some(u.id) != except) {
            if documento_id == Some(user.documento_id) {
                return Err(duplicate("documento_id", &user.documento_id.to_string()));
            }
            if let (Some(wanted), Some(existing)) = (email, user.email.as_deref()) {
                if normalize_email(wanted) == normalize_email(existing) {
                    return Err(duplicate("email", wanted));
                }
            }
        }
        Ok(())
    }

    fn ensure_company_exists(&self, company_id: i32) -> Result<(), DomainError> {
        if !self.companies.iter().any(|c| c.id == company_id) {
            return Err(DomainError::Store(format!(
                "violates foreign key constraint \"fk_area_company\": company {} does not exist",
                company_id
            )));
        }
        Ok(())
    }
}

fn duplicate(column: &str, value: &str) -> DomainError {
    DomainError::Conflict(format!(
        "Registro duplicado: {} = {} ya existe",
        column, value
    ))
}

pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HourReportRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<HourReportView>, DomainError> {
        Ok(self.tables.read().await.report_views(|_| true))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<HourReportView>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .reports
            .iter()
            .find(|r| r.id == id)
            .map(|r| tables.report_view(r)))
    }

    async fn find_by_documento(
        &self,
        documento_id: i64,
    ) -> Result<Vec<HourReportView>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.report_views(|r| r.documento_id == documento_id))
    }

    async fn find_by_cliente(&self, cliente: &str) -> Result<Vec<HourReportView>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.report_views(|r| r.cliente == cliente))
    }

    async fn find_by_status(
        &self,
        status: ApprovalStatus,
    ) -> Result<Vec<HourReportView>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.report_views(|r| r.aprobado == status))
    }

    async fn create(&self, report: &NewHourReport) -> Result<HourReport, DomainError> {
        let mut tables = self.tables.write().await;
        let created = HourReport {
            id: tables.next_id(),
            created_at: Utc::now(),
            horas: report.horas,
            fecha_trabajada: report.fecha_trabajada,
            cliente: report.cliente.clone(),
            documento_id: report.documento_id,
            area_trabajo: report.area_trabajo.clone(),
            aprobado: ApprovalStatus::Pending,
        };
        tables.reports.push(created.clone());
        debug!(id = created.id, "In-memory report inserted");
        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        patch: &HourReportPatch,
    ) -> Result<Option<HourReport>, DomainError> {
        let mut tables = self.tables.write().await;
        let found = tables.reports.iter_mut().find(|r| r.id == id);
        Ok(found.map(|report| {
            patch.apply_to(report);
            report.clone()
        }))
    }

    async fn set_status(
        &self,
        id: i32,
        status: ApprovalStatus,
    ) -> Result<Option<HourReport>, DomainError> {
        let mut tables = self.tables.write().await;
        let found = tables.reports.iter_mut().find(|r| r.id == id);
        Ok(found.map(|report| {
            report.aprobado = status;
            report.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<HourReport>, DomainError> {
        let mut tables = self.tables.write().await;
        let position = tables.reports.iter().position(|r| r.id == id);
        Ok(position.map(|idx| tables.reports.remove(idx)))
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
        let mut companies = self.tables.read().await.companies.clone();
        companies.sort_by_key(|c| c.id);
        Ok(companies)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.companies.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_pep(&self, elemento_pep: &str) -> Result<Option<Company>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .companies
            .iter()
            .find(|c| c.elemento_pep == elemento_pep)
            .cloned())
    }

    async fn create(&self, company: &NewCompany) -> Result<Company, DomainError> {
        let mut tables = self.tables.write().await;
        tables.ensure_unique_pep(&company.elemento_pep, None)?;
        let created = Company {
            id: tables.next_id(),
            nombre_company: company.nombre_company.clone(),
            elemento_pep: company.elemento_pep.clone(),
        };
        tables.companies.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, patch: &CompanyPatch) -> Result<Option<Company>, DomainError> {
        let mut tables = self.tables.write().await;
        if let Some(pep) = &patch.elemento_pep {
            tables.ensure_unique_pep(pep, Some(id))?;
        }
        let found = tables.companies.iter_mut().find(|c| c.id == id);
        Ok(found.map(|company| {
            if let Some(nombre) = &patch.nombre_company {
                company.nombre_company = nombre.clone();
            }
            if let Some(pep) = &patch.elemento_pep {
                company.elemento_pep = pep.clone();
            }
            company.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<Company>, DomainError> {
        let mut tables = self.tables.write().await;
        let Some(idx) = tables.companies.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        // ON DELETE CASCADE
        tables.areas.retain(|a| a.company_id != id);
        Ok(Some(tables.companies.remove(idx)))
    }
}

#[async_trait]
impl AreaRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<AreaView>, DomainError> {
        let tables = self.tables.read().await;
        let mut views: Vec<_> = tables.areas.iter().map(|a| tables.area_view(a)).collect();
        views.sort_by_key(|v| v.area.id);
        Ok(views)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<AreaView>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .areas
            .iter()
            .find(|a| a.id == id)
            .map(|a| tables.area_view(a)))
    }

    async fn find_by_company(&self, company_id: i32) -> Result<Vec<AreaView>, DomainError> {
        let tables = self.tables.read().await;
        let mut views: Vec<_> = tables
            .areas
            .iter()
            .filter(|a| a.company_id == company_id)
            .map(|a| tables.area_view(a))
            .collect();
        views.sort_by_key(|v| v.area.id);
        Ok(views)
    }

    async fn create(&self, area: &NewArea) -> Result<AreaEnCompany, DomainError> {
        let mut tables = self.tables.write().await;
        tables.ensure_company_exists(area.company_id)?;
        let created = AreaEnCompany {
            id: tables.next_id(),
            nombre_area: area.nombre_area.clone(),
            area_cliente: area.area_cliente,
            company_id: area.company_id,
        };
        tables.areas.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        patch: &AreaPatch,
    ) -> Result<Option<AreaEnCompany>, DomainError> {
        let mut tables = self.tables.write().await;
        if let Some(company_id) = patch.company_id {
            tables.ensure_company_exists(company_id)?;
        }
        let found = tables.areas.iter_mut().find(|a| a.id == id);
        Ok(found.map(|area| {
            if let Some(nombre) = &patch.nombre_area {
                area.nombre_area = nombre.clone();
            }
            if let Some(area_cliente) = patch.area_cliente {
                area.area_cliente = area_cliente;
            }
            if let Some(company_id) = patch.company_id {
                area.company_id = company_id;
            }
            area.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<AreaEnCompany>, DomainError> {
        let mut tables = self.tables.write().await;
        let position = tables.areas.iter().position(|a| a.id == id);
        Ok(position.map(|idx| tables.areas.remove(idx)))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let mut users = self.tables.read().await.users.clone();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_documento(&self, documento_id: i64) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.documento_id == documento_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let wanted = normalize_email(email);
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.email.as_deref().map(normalize_email).as_ref() == Some(&wanted))
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        tables.ensure_unique_user(Some(user.documento_id), user.email.as_deref(), None)?;
        let created = User {
            id: tables.next_id(),
            documento_id: user.documento_id,
            nombre_usuario: user.nombre_usuario.clone(),
            email: user.email.clone(),
            rol: user.rol,
            password_hash: user.password.clone(),
        };
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, patch: &UserPatch) -> Result<Option<User>, DomainError> {
        let mut tables = self.tables.write().await;
        let email = patch.email.as_ref().and_then(Option::as_deref);
        tables.ensure_unique_user(patch.documento_id, email, Some(id))?;
        let found = tables.users.iter_mut().find(|u| u.id == id);
        Ok(found.map(|user| {
            if let Some(documento_id) = patch.documento_id {
                user.documento_id = documento_id;
            }
            if let Some(nombre) = &patch.nombre_usuario {
                user.nombre_usuario = nombre.clone();
            }
            if let Some(email) = &patch.email {
                user.email = email.clone();
            }
            if let Some(rol) = patch.rol {
                user.rol = rol;
            }
            if let Some(hash) = &patch.password {
                user.password_hash = hash.clone();
            }
            user.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, DomainError> {
        let mut tables = self.tables.write().await;
        let position = tables.users.iter().position(|u| u.id == id);
        Ok(position.map(|idx| tables.users.remove(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_report(cliente: &str, area: Option<&str>) -> NewHourReport {
        NewHourReport {
            horas: 4.0,
            fecha_trabajada: None,
            cliente: cliente.to_string(),
            documento_id: 1001,
            area_trabajo: area.map(str::to_string),
        }
    }

    fn new_area(nombre: &str, company_id: i32) -> NewArea {
        NewArea {
            nombre_area: nombre.to_string(),
            area_cliente: Some(7),
            company_id,
        }
    }

    async fn company(companies: &dyn CompanyRepository, pep: &str) -> Company {
        let company = NewCompany {
            nombre_company: format!("Compañía {}", pep),
            elemento_pep: pep.to_string(),
        };
        companies.create(&company).await.unwrap()
    }

    #[tokio::test]
    async fn test_report_view_joins_are_tolerant() {
        let store = InMemoryStore::new();
        let reports: &dyn HourReportRepository = &store;
        let acme = company(&store, "PEP-1").await;
        let area = AreaRepository::create(&store, &new_area("Soporte", acme.id))
            .await
            .unwrap();

        let area_id = area.id.to_string();
        let joined = reports.create(&new_report("PEP-1", Some(&area_id))).await;
        let joined = joined.unwrap();
        let orphan = reports.create(&new_report("PEP-404", Some("999"))).await;
        let orphan = orphan.unwrap();

        let view = reports.find_by_id(joined.id).await.unwrap().unwrap();
        assert_eq!(view.nombre_company.as_deref(), Some("Compañía PEP-1"));
        assert_eq!(view.nombre_area.as_deref(), Some("Soporte"));

        let view = reports.find_by_id(orphan.id).await.unwrap().unwrap();
        assert!(view.nombre_company.is_none());
        assert!(view.nombre_area.is_none());
    }

    #[tokio::test]
    async fn test_reports_list_newest_first() {
        let store = InMemoryStore::new();
        let reports: &dyn HourReportRepository = &store;
        let first = reports.create(&new_report("PEP-1", None)).await.unwrap();
        let second = reports.create(&new_report("PEP-1", None)).await.unwrap();

        let listed = reports.find_all().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|v| v.report.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_partial_update_changes_only_supplied_fields() {
        let store = InMemoryStore::new();
        let reports: &dyn HourReportRepository = &store;
        let report = new_report("PEP-2", Some("3"));
        let created = reports.create(&report).await.unwrap();

        let patch = HourReportPatch {
            horas: Some(6.0),
            ..Default::default()
        };
        let updated = reports.update(created.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.horas, 6.0);
        assert_eq!(updated.cliente, "PEP-2");
        assert_eq!(updated.area_trabajo.as_deref(), Some("3"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_null_in_patch_clears_nullable_columns() {
        let store = InMemoryStore::new();
        let reports: &dyn HourReportRepository = &store;
        let mut report = new_report("PEP-2", Some("3"));
        report.fecha_trabajada = chrono::NaiveDate::from_ymd_opt(2025, 3, 10);
        let created = reports.create(&report).await.unwrap();

        let patch = HourReportPatch {
            fecha_trabajada: Some(None),
            area_trabajo: Some(None),
            ..Default::default()
        };
        let updated = reports.update(created.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.fecha_trabajada, None);
        assert_eq!(updated.area_trabajo, None);
        assert_eq!(updated.horas, 4.0);

        let acme = company(&store, "PEP-2").await;
        let areas: &dyn AreaRepository = &store;
        let area = areas.create(&new_area("Soporte", acme.id)).await.unwrap();
        let patch = AreaPatch {
            area_cliente: Some(None),
            ..Default::default()
        };
        let updated = areas.update(area.id, &patch).await.unwrap().unwrap();
        assert_eq!(updated.area_cliente, None);
        assert_eq!(updated.nombre_area, "Soporte");
    }

    #[tokio::test]
    async fn test_email_lookup_ignores_case() {
        let store = InMemoryStore::new();
        let users: &dyn UserRepository = &store;
        let user = NewUser {
            documento_id: 1001,
            nombre_usuario: "Ana".to_string(),
            email: Some("Ana.Perez@Example.com".to_string()),
            rol: 1,
            password: "hash".to_string(),
        };
        users.create(&user).await.unwrap();

        let found = users.find_by_email("ana.perez@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.documento_id), Some(1001));

        let twin = NewUser {
            documento_id: 1002,
            email: Some("ANA.PEREZ@example.com".to_string()),
            ..user
        };
        let err = users.create(&twin).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_store_unchanged() {
        let store = InMemoryStore::new();
        let reports: &dyn HourReportRepository = &store;
        let created = reports.create(&new_report("PEP-1", None)).await.unwrap();

        assert!(reports.delete(created.id + 100).await.unwrap().is_none());
        assert_eq!(reports.find_all().await.unwrap().len(), 1);

        let deleted = reports.delete(created.id).await.unwrap().unwrap();
        assert_eq!(deleted, created);
        assert!(reports.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_pep_is_conflict() {
        let store = InMemoryStore::new();
        let companies: &dyn CompanyRepository = &store;
        company(companies, "PEP-1").await;

        let twin = NewCompany {
            nombre_company: "Otra".to_string(),
            elemento_pep: "PEP-1".to_string(),
        };
        let err = companies.create(&twin).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_company_delete_cascades_to_areas() {
        let store = InMemoryStore::new();
        let areas: &dyn AreaRepository = &store;
        let acme = company(&store, "PEP-1").await;
        let area = new_area("Desarrollo", acme.id);
        areas.create(&area).await.unwrap();

        CompanyRepository::delete(&store, acme.id).await.unwrap();
        assert!(areas.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_filter() {
        let store = InMemoryStore::new();
        let reports: &dyn HourReportRepository = &store;
        let a = reports.create(&new_report("PEP-1", None)).await.unwrap();
        reports.create(&new_report("PEP-1", None)).await.unwrap();
        let approved = ApprovalStatus::Approved;
        reports.set_status(a.id, approved).await.unwrap();

        let approved = reports.find_by_status(approved).await.unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].report.id, a.id);
    }
}
