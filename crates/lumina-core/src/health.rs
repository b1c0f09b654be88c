use axum::Json;
use serde_json::{Value, json};

/// Liveness: the process is up and serving.
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness. The portal holds no warm-up state, so ready equals alive;
/// services with startup work mount their own handler instead.
pub async fn readyz() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}
