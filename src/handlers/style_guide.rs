use axum::extract::Path;
use axum::Json;

use crate::errors::AppError;
use crate::services::style_guide::{suggestions_for, FaceShape};

// GET /face-shapes
pub async fn list_face_shapes() -> Json<serde_json::Value> {
    let shapes: Vec<_> = FaceShape::ALL.into_iter().map(suggestions_for).collect();
    Json(serde_json::json!({ "success": true, "shapes": shapes }))
}

// GET /face-shapes/:shape
pub async fn get_face_shape(Path(shape): Path<String>) -> Result<Json<serde_json::Value>, AppError> {
    let shape = FaceShape::parse(&shape).ok_or(AppError::NotFound("Face shape"))?;
    Ok(Json(serde_json::json!({ "success": true, "suggestions": suggestions_for(shape) })))
}
