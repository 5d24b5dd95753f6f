pub mod bookings;
pub mod calendar;
pub mod catalog;
pub mod chat;
pub mod health;
pub mod style_guide;

use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/bookings",
            post(bookings::create_booking).get(bookings::list_bookings),
        )
        .route("/bookings/:id", get(bookings::get_booking))
        .route(
            "/bookings/:id/status",
            patch(bookings::update_booking_status),
        )
        .route("/bookings/:id/calendar.ics", get(calendar::download_ics))
        .route("/services", get(catalog::list_services))
        .route("/services/:id", get(catalog::get_service))
        .route("/packages", get(catalog::list_packages))
        .route("/packages/:id", get(catalog::get_package))
        .route("/time-slots", get(catalog::list_time_slots))
        .route("/chat", post(chat::reply))
        .route("/chat/greeting", get(chat::greeting))
        .route("/face-shapes", get(style_guide::list_face_shapes))
        .route("/face-shapes/:shape", get(style_guide::get_face_shape))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
