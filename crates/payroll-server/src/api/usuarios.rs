use crate::error::ApiResult;
use crate::state::AppState;
use application::params::parse_id;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use domain::user::{NewUser, UserPatch};
use serde_json::json;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/usuarios", get(list).post(create))
        .route("/usuarios/{id}", get(get_one).put(update).delete(remove))
        .route("/usuarios/documento/{documento_id}", get(by_documento))
}

async fn list(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.users.list().await?))
}

async fn get_one(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.users.get(parse_id(&id)?).await?))
}

async fn by_documento(
    Path(documento_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.users.by_documento(&documento_id).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(user) = payload?;
    let created = state.users.create(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let Json(patch) = payload?;
    Ok(Json(state.users.update(id, patch).await?))
}

async fn remove(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state.users.delete(parse_id(&id)?).await?;
    Ok(Json(json!({ "message": "Usuario eliminado", "deleted": deleted })))
}
