use std::error::Error as _;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use party_booking_config::ConfigError;
use party_booking_database::DatabaseError;
use serde::Serialize;
use tracing::{debug, error};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid request body")]
    MalformedPayload(#[from] JsonRejection),
    #[error("invalid booking: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("Failed to save booking")]
    SaveBooking(#[source] DatabaseError),
    #[error("Failed to fetch bookings")]
    FetchBookings(#[source] DatabaseError),
    #[error("Admin access is not configured")]
    AdminNotConfigured,
    #[error("Unauthorized")]
    Unauthorized,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<String>,
}

fn error_body(status: StatusCode, error: &AppError) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                debug!("rejected booking: {}", errors.join(", "));
                (StatusCode::BAD_REQUEST, Json(ValidationBody { errors })).into_response()
            }
            err @ Self::MalformedPayload(_) => {
                debug!("rejected request body: {err:?}");
                error_body(StatusCode::BAD_REQUEST, &err)
            }
            err @ Self::Unauthorized => error_body(StatusCode::UNAUTHORIZED, &err),
            err @ Self::AdminNotConfigured => {
                error!("listing bookings requires an admin secret, none is configured");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, &err)
            }
            err @ (Self::SaveBooking(_) | Self::FetchBookings(_)) => {
                if let Some(source) = err.source() {
                    error!("{err}: {source}");
                }
                error_body(StatusCode::INTERNAL_SERVER_ERROR, &err)
            }
            err @ (Self::Config(_) | Self::Database(_) | Self::Io(_)) => {
                error!("{err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Internal server error".to_owned(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
