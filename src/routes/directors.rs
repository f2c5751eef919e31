use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{DirectorPayload, DirectorView},
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<DirectorView>>> {
    Ok(Json(state.catalog.list_directors().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<DirectorPayload>, AppError>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    payload.validate()?;
    let id = state.catalog.create_director(payload).await?;
    tracing::info!(id, "director created");
    Ok(super::created())
}

pub async fn detail(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<DirectorView>> {
    Ok(Json(state.catalog.get_director(id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<DirectorPayload>, AppError>,
) -> AppResult<StatusCode> {
    payload.validate()?;
    state.catalog.update_director(id, payload).await?;
    tracing::info!(id, "director updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    state.catalog.delete_director(id).await?;
    tracing::info!(id, "director deleted");
    Ok(StatusCode::NO_CONTENT)
}
