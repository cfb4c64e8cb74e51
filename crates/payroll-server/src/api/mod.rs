mod areas;
mod auth;
mod companies;
mod distribucion;
mod health;
mod reportes;
mod usuarios;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(reportes::routes())
        .merge(companies::routes())
        .merge(areas::routes())
        .merge(usuarios::routes())
        .merge(auth::routes())
        .merge(distribucion::routes())
        .merge(health::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
