use std::sync::Arc;

use axum::{Json, Router, http::StatusCode, routing::get};

use crate::AppState;

pub mod directors;
pub mod genres;
pub mod movies;

const CREATED_MESSAGE: &str = "Record added";

fn created() -> (StatusCode, Json<&'static str>) {
    (StatusCode::CREATED, Json(CREATED_MESSAGE))
}

pub fn catalog_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/", get(movies::list).post(movies::create))
        .route("/movies/{id}", get(movies::detail).put(movies::update).delete(movies::delete))
        .route("/directors", get(directors::list).post(directors::create))
        .route("/directors/", get(directors::list).post(directors::create))
        .route(
            "/directors/{id}",
            get(directors::detail).put(directors::update).delete(directors::delete),
        )
        .route("/genres", get(genres::list).post(genres::create))
        .route("/genres/", get(genres::list).post(genres::create))
        .route("/genres/{id}", get(genres::detail).put(genres::update).delete(genres::delete))
}
