use crate::error::ApiResult;
use crate::state::AppState;
use application::params::parse_id;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use domain::area::{AreaPatch, NewArea};
use serde_json::json;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/areas", get(list).post(create))
        .route("/areas/{id}", get(get_one).put(update).delete(remove))
        .route("/areas/company/{company_id}", get(by_company))
}

async fn list(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.areas.list().await?))
}

async fn get_one(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.areas.get(parse_id(&id)?).await?))
}

async fn by_company(
    Path(company_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.areas.by_company(&company_id).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewArea>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(area) = payload?;
    let created = state.areas.create(area).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AreaPatch>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let Json(patch) = payload?;
    Ok(Json(state.areas.update(id, patch).await?))
}

async fn remove(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state.areas.delete(parse_id(&id)?).await?;
    Ok(Json(json!({ "message": "Área eliminada", "deleted": deleted })))
}
