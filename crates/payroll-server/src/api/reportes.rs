use crate::error::ApiResult;
use crate::state::AppState;
use application::params::parse_id;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use domain::report::{HourReportPatch, NewHourReport};
use serde_json::json;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reportes", get(list).post(create))
        .route("/reportes/{id}", get(get_one).put(update).delete(remove))
        .route("/reportes/{id}/aprobar", post(approve))
        .route("/reportes/{id}/rechazar", post(reject))
        .route("/reportes/documento/{documento_id}", get(by_documento))
        .route("/reportes/documento/{documento_id}/historial", get(history))
        .route("/reportes/cliente/{cliente_id}", get(by_cliente))
        .route("/reportes/estado/{estado}", get(by_estado))
}

async fn list(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reports.list().await?))
}

/// Answers `null` when the id is absent
async fn get_one(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reports.get(parse_id(&id)?).await?))
}

async fn by_documento(
    Path(documento_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reports.by_documento(&documento_id).await?))
}

async fn history(
    Path(documento_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reports.history(&documento_id).await?))
}

async fn by_cliente(
    Path(cliente_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reports.by_cliente(&cliente_id).await?))
}

async fn by_estado(
    Path(estado): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reports.by_status(&estado).await?))
}

async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewHourReport>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(report) = payload?;
    let created = state.reports.create(report).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HourReportPatch>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let Json(patch) = payload?;
    Ok(Json(state.reports.update(id, patch).await?))
}

async fn approve(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reports.approve(parse_id(&id)?).await?))
}

async fn reject(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reports.reject(parse_id(&id)?).await?))
}

async fn remove(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state.reports.delete(parse_id(&id)?).await?;
    Ok(Json(json!({ "message": "Reporte eliminado", "deleted": deleted })))
}
