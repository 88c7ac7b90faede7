use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use party_booking_database::SharedBookingStore;
use serde_json::{json, Value};
use tracing::warn;

pub async fn health(State(store): State<SharedBookingStore>) -> (StatusCode, Json<Value>) {
    match store.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(error) => {
            warn!("health check failed: {error}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "error": error.to_string() })),
            )
        }
    }
}
