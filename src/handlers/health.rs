use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "message": format!("{} API is running", state.config.salon_name),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
