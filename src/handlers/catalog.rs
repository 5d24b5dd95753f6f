use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::{AppError, ValidationError};
use crate::models::booking::time_slots;
use crate::models::{Service, ServiceCategory};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ServicesQuery {
    pub category: Option<String>,
}

// GET /services
pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ServicesQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let services: Vec<&Service> = match query.category.as_deref().map(str::trim) {
        None | Some("") | Some("all") => state.catalog.services().iter().collect(),
        Some(raw) => {
            let category = ServiceCategory::parse(raw)
                .ok_or_else(|| ValidationError::UnknownCategory(raw.to_string()))?;
            state.catalog.services_in(category)
        }
    };

    Ok(Json(serde_json::json!({ "success": true, "services": services })))
}

// GET /services/:id
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let service = state.catalog.service(&id).ok_or(AppError::NotFound("Service"))?;
    Ok(Json(serde_json::json!({ "success": true, "service": service })))
}

// GET /packages
pub async fn list_packages(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "success": true, "packages": state.catalog.packages() }))
}

// GET /packages/:id
pub async fn get_package(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let package = state.catalog.package(&id).ok_or(AppError::NotFound("Package"))?;
    let services = state.catalog.package_services(package);
    let value: u32 = services.iter().map(|s| s.price).sum();

    Ok(Json(serde_json::json!({
        "success": true,
        "package": package,
        "services": services,
        "servicesValue": value,
    })))
}

// GET /time-slots
pub async fn list_time_slots() -> Json<serde_json::Value> {
    let slots: Vec<String> = time_slots()
        .iter()
        .map(|t| t.format("%H:%M").to_string())
        .collect();
    Json(serde_json::json!({ "success": true, "slots": slots }))
}
