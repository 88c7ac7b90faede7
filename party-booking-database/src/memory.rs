use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::DatabaseError;
use crate::models::{Booking, NewBooking};
use crate::BookingStore;

/// Keeps bookings in process memory. Everything is lost on restart.
#[derive(Default)]
pub struct MemoryBookingStore {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    bookings: Vec<Booking>,
}

impl MemoryBookingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn insert(&self, booking: NewBooking) -> Result<Booking, DatabaseError> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let booking = booking.with_id(state.last_id);
        state.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn list_all(&self) -> Result<Vec<Booking>, DatabaseError> {
        let mut bookings = self.state.read().await.bookings.clone();
        // stable, so equal slots stay in id order
        bookings.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        Ok(bookings)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
