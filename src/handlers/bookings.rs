use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::{AppError, ValidationError};
use crate::models::{Booking, BookingStatus};
use crate::services::booking;
use crate::services::booking_form::BookingForm;
use crate::state::AppState;

const DEFAULT_LIST_LIMIT: i64 = 100;
const MAX_LIST_LIMIT: i64 = 500;

/// `service` may be a single id or a list of ids.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ServiceField {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    #[serde(alias = "services")]
    pub service: Option<ServiceField>,
    #[serde(alias = "packageId", alias = "package")]
    pub package_type: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<CreateBookingRequest> for BookingForm {
    type Error = ValidationError;

    fn try_from(req: CreateBookingRequest) -> Result<Self, Self::Error> {
        let services: Vec<String> = match req.service {
            None => vec![],
            Some(ServiceField::One(id)) => vec![id],
            Some(ServiceField::Many(ids)) => ids,
        }
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect();

        let package = req
            .package_type
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        if package.is_some() && !services.is_empty() {
            return Err(ValidationError::ConflictingSelection);
        }

        let mut form = BookingForm::new();
        form.customer_name = req.name.unwrap_or_default();
        form.customer_phone = req.phone.unwrap_or_default();
        form.customer_email = req.email.unwrap_or_default();
        form.appointment_date = req.date.unwrap_or_default();
        form.appointment_time = req.time.unwrap_or_default();
        form.notes = req.notes.unwrap_or_default();

        match package {
            Some(package) => form.select_package(&package),
            None => services.iter().for_each(|id| form.add_service(id)),
        }

        Ok(form)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    id: String,
    name: String,
    email: Option<String>,
    phone: String,
    date: String,
    time: String,
    services: Vec<String>,
    package_id: Option<String>,
    notes: String,
    status: BookingStatus,
    total_amount: u32,
    duration_minutes: u32,
    created_at: String,
    updated_at: String,
}

impl From<&Booking> for BookingResponse {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id.clone(),
            name: b.customer_name.clone(),
            email: b.customer_email.clone(),
            phone: b.customer_phone.clone(),
            date: b.date.format("%Y-%m-%d").to_string(),
            time: b.time.format("%H:%M").to_string(),
            services: b.selection.service_ids().to_vec(),
            package_id: b.selection.package_id().map(str::to_string),
            notes: b.notes.clone(),
            status: b.status,
            total_amount: b.total_amount,
            duration_minutes: b.duration_minutes,
            created_at: b.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: b.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

// POST /bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let Json(req) = payload.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
    let form = BookingForm::try_from(req)?;

    let booking = booking::submit_booking(&state, &form).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "Booking created successfully",
            "booking": BookingResponse::from(&booking),
        })),
    ))
}

// GET /bookings
#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    query: Result<Query<BookingsQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(query) = query.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
    let status_filter = query
        .status
        .as_deref()
        .map(|s| BookingStatus::parse(s).ok_or_else(|| ValidationError::InvalidStatus(s.to_string())))
        .transpose()?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    let bookings = {
        let db = state.db()?;
        queries::get_all_bookings(&db, status_filter, limit)?
    };

    let bookings: Vec<BookingResponse> = bookings.iter().map(BookingResponse::from).collect();
    Ok(Json(serde_json::json!({ "success": true, "bookings": bookings })))
}

// GET /bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let booking = {
        let db = state.db()?;
        queries::get_booking_by_id(&db, &id)?
    }
    .ok_or(AppError::NotFound("Booking"))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "booking": BookingResponse::from(&booking),
    })))
}

// PATCH /bookings/:id/status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(body) = payload.map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
    let raw = body
        .status
        .filter(|s| !s.trim().is_empty())
        .ok_or(ValidationError::MissingField("status"))?;
    let status = BookingStatus::parse(&raw).ok_or(ValidationError::InvalidStatus(raw.clone()))?;

    let booking = {
        let db = state.db()?;
        queries::update_booking_status(&db, &id, status)?
    }
    .ok_or(AppError::NotFound("Booking"))?;

    tracing::info!(booking_id = %booking.id, status = status.as_str(), "booking status updated");

    Ok(Json(serde_json::json!({
        "success": true,
        "booking": BookingResponse::from(&booking),
    })))
}
