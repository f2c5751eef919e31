pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod filter;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{catalog::Catalog, config::Config, error::AppResult};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Catalog,
}

impl AppState {
    pub async fn connect(config: Config) -> AppResult<Arc<Self>> {
        let db = db::connect_and_migrate(&config).await?;
        Ok(Arc::new(Self { config: Arc::new(config), catalog: Catalog::new(db) }))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    routes::catalog_routes()
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
