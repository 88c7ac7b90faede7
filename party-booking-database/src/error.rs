use diesel_async::pooled_connection::deadpool;
use thiserror::Error;

/// Failures of the PostgreSQL booking store.
#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to build the bookings connection pool: {0}")]
    BuildPool(#[from] deadpool::BuildError),
    #[error("No bookings connection available: {0}")]
    Checkout(#[from] deadpool::PoolError),
    #[error("Bookings query failed: {0}")]
    Query(#[from] diesel::result::Error),
}
