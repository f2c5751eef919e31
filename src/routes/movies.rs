use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState,
    error::{AppError, AppResult},
    filter::MovieFilter,
    models::{MoviePayload, MovieView},
};

pub async fn list(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(filter), _): WithRejection<Query<MovieFilter>, AppError>,
) -> AppResult<Json<Vec<MovieView>>> {
    Ok(Json(state.catalog.list_movies(&filter).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<MoviePayload>, AppError>,
) -> AppResult<(StatusCode, Json<&'static str>)> {
    payload.validate()?;
    let id = state.catalog.create_movie(payload).await?;
    tracing::info!(id, "movie created");
    Ok(super::created())
}

pub async fn detail(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<MovieView>> {
    Ok(Json(state.catalog.get_movie(id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<MoviePayload>, AppError>,
) -> AppResult<StatusCode> {
    payload.validate()?;
    state.catalog.update_movie(id, payload).await?;
    tracing::info!(id, "movie updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<StatusCode> {
    state.catalog.delete_movie(id).await?;
    tracing::info!(id, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
