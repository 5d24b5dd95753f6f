use std::sync::Arc;

use chrono::{SubsecRound, Utc};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::Booking;
use crate::services::booking_form::BookingForm;
use crate::state::AppState;

/// Validates and stores a booking, then tries to notify the salon.
/// Only validation and storage failures are returned; a failed
/// notification is logged and the stored booking is still returned.
pub async fn submit_booking(state: &Arc<AppState>, form: &BookingForm) -> Result<Booking, AppError> {
    let now = Utc::now();
    let new_booking = form.validate(&state.catalog, now.date_naive())?;
    let booking = new_booking.into_booking(
        state.config.default_booking_status,
        now.naive_utc().trunc_subsecs(0),
    );

    {
        let db = state.db()?;
        queries::create_booking(&db, &booking)?;
    }

    tracing::info!(
        booking_id = %booking.id,
        date = %booking.date,
        time = %booking.time.format("%H:%M"),
        status = booking.status.as_str(),
        "booking created"
    );

    match state.notifier.notify_booking(&booking, &state.catalog).await {
        Ok(delivery_id) => {
            tracing::info!(booking_id = %booking.id, delivery_id = %delivery_id, "booking notification sent");
        }
        Err(e) => {
            tracing::warn!(booking_id = %booking.id, error = %e, "booking notification failed");
        }
    }

    Ok(booking)
}
