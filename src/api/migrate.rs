use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::migration::{MigrationRunner, PacingPolicy};
use crate::shopify::{resolve_session, ShopifyClient};
use crate::storage::RecordStore;
use crate::utils::{Config, Metrics};

pub struct MigrateState {
    pub config: Config,
    pub store: Arc<dyn RecordStore>,
    pub http: reqwest::Client,
    pub metrics: Arc<Metrics>,
}

#[derive(serde::Deserialize)]
pub struct MigrateParams {
    #[serde(default)]
    secret: Option<String>,
}

/// GET|POST /api/migrate/products - Migriere alle unmigrierten Records nach Shopify
pub async fn migrate_products(
    State(state): State<Arc<MigrateState>>,
    Query(params): Query<MigrateParams>,
    headers: HeaderMap,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // Secret prüfen bevor irgendein externer Call passiert
    if params.secret.as_deref() != Some(state.config.migration_secret.as_str()) {
        state
            .metrics
            .migration_runs
            .with_label_values(&["unauthorized"])
            .inc();
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid migration secret" })),
        ));
    }

    let Some(session) = resolve_session(&state.config, bearer_token(&headers)) else {
        state
            .metrics
            .migration_runs
            .with_label_values(&["unauthorized"])
            .inc();
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "No Shopify session" })),
        ));
    };

    let platform = Arc::new(ShopifyClient::new(
        state.http.clone(),
        &session.shop,
        &state.config.shopify_api_version,
        session.access_token.clone(),
    ));

    let runner = MigrationRunner::new(
        state.store.clone(),
        platform,
        PacingPolicy::from_config(&state.config),
        state.config.batch_size,
    );

    let timer = state.metrics.run_duration.start_timer();

    match runner.run().await {
        Ok(report) => {
            timer.observe_duration();
            state
                .metrics
                .migration_runs
                .with_label_values(&["completed"])
                .inc();
            state.metrics.records_migrated.inc_by(report.migrated as f64);
            state.metrics.records_skipped.inc_by(report.skipped as f64);
            state.metrics.records_failed.inc_by(report.failed as f64);

            Ok(Json(json!({
                "success": true,
                "migrated": report.migrated,
                "skipped": report.skipped,
                "failed": report.failed,
                "partial": report.partial,
                "batches": report.batches,
                "run_id": report.run_id,
                "failures": report.failures,
            })))
        }
        Err(e) => {
            timer.stop_and_discard();
            state
                .metrics
                .migration_runs
                .with_label_values(&["failed"])
                .inc();
            tracing::error!("Migration run failed: {}", e);

            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}

/// Extrahiere Bearer Token aus dem Authorization Header
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Router für Migration Endpoints
pub fn migrate_router(state: Arc<MigrateState>) -> Router {
    Router::new()
        .route("/products", get(migrate_products).post(migrate_products))
        .with_state(state)
}
