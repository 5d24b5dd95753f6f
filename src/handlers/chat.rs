use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use crate::errors::{AppError, ValidationError};
use crate::services::chat;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

// POST /chat
pub async fn reply(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(body) = payload.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
    let message = body
        .message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .ok_or(ValidationError::MissingField("message"))?;

    Ok(Json(serde_json::json!({ "success": true, "reply": chat::respond(&message) })))
}

// GET /chat/greeting
pub async fn greeting() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "success": true, "reply": chat::GREETING }))
}
