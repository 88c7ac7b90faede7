use axum::extract::State;
use axum::Json;
use party_booking_database::models::Booking;
use party_booking_database::SharedBookingStore;

use crate::admin::AdminAccess;
use crate::error::AppError;

/// All bookings, ordered by date then time. Admin only.
pub async fn list(
    _admin: AdminAccess,
    State(store): State<SharedBookingStore>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = store.list_all().await.map_err(AppError::FetchBookings)?;
    Ok(Json(bookings))
}
