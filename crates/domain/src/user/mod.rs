mod auth_mode;
mod entity;
mod repository;
mod role;

pub use auth_mode::AuthMode;
pub use entity::{NewUser, User, UserPatch, normalize_email};
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockUserRepository;
pub use repository::UserRepository;
pub use role::{DashboardVariant, Role};
