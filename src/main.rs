mod api;
mod migration;
mod shopify;
mod storage;
mod utils;

#[cfg(test)]
mod tests;

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    utils::init_logging();

    let config = utils::Config::from_env()?;
    let port = config.api_port;

    tracing::info!("Starting Catalog Migrator on port {}", port);

    // Shared HTTP client für Firestore und Shopify
    let http = reqwest::Client::builder()
        .pool_max_idle_per_host(10)
        .build()?;

    // Initialize storage layer; bricht ab wenn Credentials fehlen
    let store: Arc<dyn storage::RecordStore> =
        Arc::new(storage::FirestoreClient::new(&config, http.clone())?);

    // Initialize metrics
    let metrics = Arc::new(utils::Metrics::new());

    let migrate_state = Arc::new(api::MigrateState {
        config,
        store,
        http,
        metrics: metrics.clone(),
    });

    // Build routers
    let app = Router::new()
        // Health & Admin Routes
        .nest("/api/admin", api::admin_router(metrics))
        // Migration Routes
        .nest("/api/migrate", api::migrate_router(migrate_state.clone()))
        // Session Routes
        .nest("/api/session", api::session_router(migrate_state))
        // Root health check
        .route("/health", get(health_check))
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(logging_middleware)),
        );

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server listening on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Logging middleware
async fn logging_middleware(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    // Nur den Pfad loggen; der Query String trägt das Migration Secret
    let path = req.uri().path().to_owned();

    let start = std::time::Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed();

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}
