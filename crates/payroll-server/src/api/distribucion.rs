use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use application::DistributionService;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use domain::{DateRange, DistributionError, DomainError};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RangeQuery {
    fn resolve(&self) -> ApiResult<DateRange> {
        let today = Utc::now().date_naive();
        Ok(DistributionService::resolve_range(self.from, self.to, today)?)
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/distribucion", get(preview))
        .route("/distribucion/csv", get(export_csv))
}

async fn preview(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;
    let range = query.resolve()?;

    match state.distribution.generate(range).await? {
        Some(distribution) => Ok(Json(distribution).into_response()),
        None => {
            let message = no_records(range).to_string();
            Ok(Json(json!({ "empty": true, "message": message })).into_response())
        }
    }
}

async fn export_csv(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;
    let range = query.resolve()?;

    let Some(distribution) = state.distribution.generate(range).await? else {
        return Err(ApiError(DomainError::from(no_records(range))));
    };

    let disposition = format!("attachment; filename=\"{}\"", distribution.file_name());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        distribution.to_csv(),
    )
        .into_response())
}

fn no_records(range: DateRange) -> DistributionError {
    DistributionError::NoApprovedRecords {
        from: range.from(),
        to: range.to(),
    }
}
