use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::db::queries;
use crate::errors::AppError;
use crate::services::calendar::generate_ics;
use crate::state::AppState;

// GET /bookings/:id/calendar.ics
pub async fn download_ics(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<Response, AppError> {
    let booking = {
        let db = state.db()?;
        queries::get_booking_by_id(&db, &booking_id)?
    }
    .ok_or(AppError::NotFound("Booking"))?;

    let ics = generate_ics(&booking, &state.catalog, &state.config.salon_name);
    let filename = format!("booking-{}.ics", booking.id);

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        ics,
    )
        .into_response())
}
