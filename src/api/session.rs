use axum::{extract::State, routing::get, Json, Router};
use axum::http::HeaderMap;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::migrate::{bearer_token, MigrateState};
use crate::shopify::resolve_session;

/// GET /api/session/check - Prüfe ob für den Request eine Shopify Session auflösbar ist
pub async fn session_check(
    State(state): State<Arc<MigrateState>>,
    headers: HeaderMap,
) -> Json<Value> {
    let session = resolve_session(&state.config, bearer_token(&headers));

    Json(json!({
        "authenticated": session.is_some(),
        "shop": session.map(|s| s.shop),
    }))
}

/// Router für Session Endpoints
pub fn session_router(state: Arc<MigrateState>) -> Router {
    Router::new()
        .route("/check", get(session_check))
        .with_state(state)
}
