pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod schema;

use std::sync::Arc;

use async_trait::async_trait;
pub use error::DatabaseError;
pub use memory::MemoryBookingStore;
use models::{Booking, NewBooking};
pub use postgres::{get_database_connection, PgBookingStore, Pool};

/// Append-only booking persistence.
///
/// Bookings are never updated or deleted once inserted, and there is no lookup
/// by id. `list_all` orders by `date` then `time`, both compared as plain
/// strings, so callers have to use zero-padded ISO-8601 dates (`2026-03-15`)
/// and 24-hour times (`18:00`) for the order to be chronological. Bookings with
/// the same date and time come back in insertion order.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Stores the booking and returns it with its newly assigned id.
    async fn insert(&self, booking: NewBooking) -> Result<Booking, DatabaseError>;

    async fn list_all(&self) -> Result<Vec<Booking>, DatabaseError>;

    /// Checks that the storage medium is reachable.
    async fn ping(&self) -> Result<(), DatabaseError>;
}

pub type SharedBookingStore = Arc<dyn BookingStore>;
