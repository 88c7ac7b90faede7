use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::pooled_connection::deadpool;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::info;

use crate::error::DatabaseError;
use crate::models::{Booking, NewBooking};
use crate::schema::{bookings, CREATE_BOOKINGS_TABLE};
use crate::BookingStore;

pub type Pool = deadpool::Pool<AsyncPgConnection>;

// https://github.com/tokio-rs/axum/tree/main/examples/diesel-async-postgres

/// Builds the pool lazily, no connection is opened until the first checkout.
pub fn get_database_connection(database_url: &str) -> Result<Pool, DatabaseError> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    Ok(Pool::builder(config).build()?)
}

#[derive(Clone)]
pub struct PgBookingStore {
    pool: Pool,
}

impl PgBookingStore {
    #[must_use]
    pub const fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub fn connect(database_url: &str) -> Result<Self, DatabaseError> {
        Ok(Self::new(get_database_connection(database_url)?))
    }

    /// Creates the bookings table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        let mut connection = self.pool.get().await?;
        diesel::sql_query(CREATE_BOOKINGS_TABLE)
            .execute(&mut connection)
            .await?;
        info!("bookings table ready");
        Ok(())
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn insert(&self, booking: NewBooking) -> Result<Booking, DatabaseError> {
        let mut connection = self.pool.get().await?;
        let booking = diesel::insert_into(bookings::table)
            .values(&booking)
            .returning(Booking::as_returning())
            .get_result(&mut connection)
            .await?;
        Ok(booking)
    }

    async fn list_all(&self) -> Result<Vec<Booking>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        // collation repeated here, tables created before it was added to the
        // column definitions still sort byte-wise
        let bookings = bookings::table
            .order((
                sql::<Text>(r#"bookings.date COLLATE "C""#),
                sql::<Text>(r#"bookings.time COLLATE "C""#),
                bookings::id.asc(),
            ))
            .select(Booking::as_select())
            .load(&mut connection)
            .await?;
        Ok(bookings)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        let mut connection = self.pool.get().await?;
        diesel::sql_query("SELECT 1")
            .execute(&mut connection)
            .await?;
        Ok(())
    }
}
