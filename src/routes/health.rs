//! # routes::health

use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::state::SharedState;

// ─── GET /api/health ──────────────────────────────────────────────────────────

/// Liveness probe; the web client also uses it to detect a restarted
/// (and therefore emptied) backend via `startedAt`.
pub async fn health_check(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "status":    "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "startedAt": state.started_at.to_rfc3339(),
        "expenses":  state.expenses.count().await,
    }))
}
