use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub documento_id: i64,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct IdentityRequest {
    pub email: String,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/identity", post(identity))
}

async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = payload?;
    Ok(Json(state.auth.login(req.documento_id, &req.password).await?))
}

/// The caller has already been vouched for by the identity provider
async fn identity(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<IdentityRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = payload?;
    Ok(Json(state.auth.identify(&req.email).await?))
}
