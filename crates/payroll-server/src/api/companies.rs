use crate::error::ApiResult;
use crate::state::AppState;
use application::params::parse_id;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use domain::company::{CompanyPatch, NewCompany};
use serde_json::json;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", get(list).post(create))
        .route("/companies/{id}", get(get_one).put(update).delete(remove))
        .route("/companies/pep/{pep}", get(by_pep))
}

async fn list(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.companies.list().await?))
}

async fn get_one(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.companies.get(parse_id(&id)?).await?))
}

async fn by_pep(
    Path(pep): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.companies.by_pep(&pep).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewCompany>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(company) = payload?;
    let created = state.companies.create(company).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CompanyPatch>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let Json(patch) = payload?;
    Ok(Json(state.companies.update(id, patch).await?))
}

async fn remove(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state.companies.delete(parse_id(&id)?).await?;
    Ok(Json(json!({ "message": "Compañía eliminada", "deleted": deleted })))
}
