use party_booking_backend::error::AppError;
use party_booking_backend::run_server;
use party_booking_backend::telemetry::setup_tracing;
use party_booking_config::get_config;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_tracing();

    let config = get_config()?;
    run_server(config).await
}
