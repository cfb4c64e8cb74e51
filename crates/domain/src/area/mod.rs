mod entity;
mod repository;

pub use entity::{AreaEnCompany, AreaPatch, AreaView, NewArea};
pub use repository::AreaRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockAreaRepository;
