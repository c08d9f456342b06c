use chat_service::config::ChatConfig;
use chat_service::models::catalog::OpenLibraryCatalog;
use chat_service::{build_router, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("chat_service=info,tower_http=info")
        .init();

    let config = ChatConfig::from_env()?;

    let catalog = OpenLibraryCatalog::new(&config.catalog_base_url, config.catalog_timeout)?;
    info!(
        "Using catalog at {} (timeout {:?})",
        config.catalog_base_url, config.catalog_timeout
    );
    info!("Recommendation genres: {:?}", config.genres);

    let state = AppState::new(Arc::new(catalog), config.genres.clone());
    let app = build_router(state, config.allowed_origin.clone());

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Chat service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
