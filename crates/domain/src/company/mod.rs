mod entity;
mod repository;

pub(crate) use entity::require_text;
pub use entity::{Company, CompanyPatch, NewCompany};
pub use repository::CompanyRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockCompanyRepository;
