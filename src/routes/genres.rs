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
    models::{GenrePayload, GenreView},
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<GenreView>>> {
    Ok(Json(state.catalog.list_genres().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<GenrePayload>, AppError>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    payload.validate()?;
    let id = state.catalog.create_genre(payload).await?;
    tracing::info!(id, "genre created");
    Ok(super::created())
}

pub async fn detail(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<GenreView>> {
    Ok(Json(state.catalog.get_genre(id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<GenrePayload>, AppError>,
) -> AppResult<StatusCode> {
    payload.validate()?;
    state.catalog.update_genre(id, payload).await?;
    tracing::info!(id, "genre updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    state.catalog.delete_genre(id).await?;
    tracing::info!(id, "genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
