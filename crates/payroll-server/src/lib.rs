pub mod api;
pub mod error;
pub mod state;

use domain::user::AuthMode;
use sqlx::PgPool;
use state::AppState;
use std::sync::Arc;

pub use api::create_router;

pub async fn setup_app_state(pool: PgPool, auth_mode: AuthMode) -> Arc<AppState> {
    Arc::new(AppState::postgres(pool, auth_mode))
}
