#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    reason = "not yet ready for that"
)]

pub mod admin;
pub mod booking;
pub mod error;
pub mod routes;
pub mod telemetry;

use std::net::{Ipv4Addr, SocketAddrV4};
use std::sync::Arc;

use admin::AdminGate;
use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;
use error::AppError;
use party_booking_config::Config;
use party_booking_database::{MemoryBookingStore, PgBookingStore, SharedBookingStore};
use routes::bookings::create::create;
use routes::bookings::list::list;
use routes::health::health;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, warn};

#[derive(Clone, FromRef)]
pub struct MyState {
    store: SharedBookingStore,
    admin: AdminGate,
}

impl MyState {
    #[must_use]
    pub fn new(store: SharedBookingStore, admin: AdminGate) -> Self {
        Self { store, admin }
    }
}

/// Opens the configured store, falling back to memory without a database url.
/// An empty url counts as unset.
pub async fn open_store(config: &Config) -> Result<SharedBookingStore, AppError> {
    match config.database_url.as_deref().filter(|url| !url.is_empty()) {
        Some(database_url) => {
            let store = PgBookingStore::connect(database_url)?;
            store.ensure_schema().await?;
            Ok(Arc::new(store))
        }
        None => {
            warn!("no database url configured, bookings are only kept in memory");
            Ok(Arc::new(MemoryBookingStore::new()))
        }
    }
}

pub fn router(state: MyState) -> Router {
    let app = Router::new()
        .route("/book", post(create))
        .route("/bookings", get(list))
        .route("/health", get(health))
        .with_state(state);

    layers(app)
}

fn layers(app: Router) -> Router {
    // layers are in reverse order
    app.layer(
        // no headers in spans, they carry the admin token
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::default().include_headers(false))
            .on_response(DefaultOnResponse::default().include_headers(false)),
    )
    .layer(CatchPanicLayer::new())
    .layer(PropagateRequestIdLayer::x_request_id())
    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

pub async fn setup_server(config: &Config) -> Result<Router, AppError> {
    info!("starting up server...");

    let store = open_store(config).await?;
    let admin = AdminGate::new(config.admin_secret.as_deref());
    if !admin.is_configured() {
        warn!("no admin secret configured, listing bookings will fail");
    }

    Ok(router(MyState::new(store, admin)))
}

pub async fn run_server(config: Config) -> Result<(), AppError> {
    let app = setup_server(&config).await?;

    let listener = TcpListener::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, config.port)).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

#[allow(clippy::redundant_pub_crate)]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!("failed to install signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("shutting down");
}
