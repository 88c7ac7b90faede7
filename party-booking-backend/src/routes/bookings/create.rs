use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use party_booking_database::models::Booking;
use party_booking_database::SharedBookingStore;
use serde::Serialize;
use tracing::info;

use crate::booking::{validate_booking, BookingSubmission};
use crate::error::AppError;

pub const BOOKING_CONFIRMED: &str = "Booking confirmed!";

#[derive(Serialize)]
pub struct BookingCreated {
    pub message: &'static str,
    pub booking: Booking,
}

pub async fn create(
    State(store): State<SharedBookingStore>,
    payload: Result<Json<BookingSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingCreated>), AppError> {
    let Json(submission) = payload?;
    let booking = validate_booking(submission).map_err(AppError::Validation)?;
    let booking = store.insert(booking).await.map_err(AppError::SaveBooking)?;

    info!(
        id = booking.id,
        date = %booking.date,
        time = %booking.time,
        guests = booking.guests,
        "booking created"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingCreated {
            message: BOOKING_CONFIRMED,
            booking,
        }),
    ))
}
