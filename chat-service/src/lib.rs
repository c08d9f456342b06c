use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use models::catalog::BookCatalog;
use routes::{chat::chat, health::health_check};

pub type Catalog = Arc<dyn BookCatalog + Send + Sync>;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub genres: Arc<[String]>,
}

impl AppState {
    pub fn new(catalog: Catalog, genres: Vec<String>) -> Self {
        Self {
            catalog,
            genres: genres.into(),
        }
    }
}

/// Builds the service router. Cross-origin calls are accepted from
/// `allowed_origin` only.
pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/status", get(health_check))
        .route("/chat", post(chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
