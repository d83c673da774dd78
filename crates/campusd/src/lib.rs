//! Campus portal server.
//!
//! A thin HTTP and WebSocket surface over [`campusapp`]: axum routes map
//! one-to-one onto the facade's operations, a single lock serializes
//! every read-modify-write against the document store, and each
//! successful mutation is fanned out to connected WebSocket listeners
//! after it persisted.
//!
//! Configuration comes from the environment (`CAMPUSD_PORT`,
//! `CAMPUSD_DATA_DIR`); logging is `tracing` filtered by
//! `RUST_LOG`.

use campusapp::api::CampusApi;
use campusapp::store::fs_backend::FsBackend;
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{signal, SignalKind},
    },
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod ws;

use config::Config;
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    info!("Opening data store in {}", config.data_dir.display());
    let api = CampusApi::open(FsBackend::new(config.data_dir.clone()))
        .expect("Failed to open data store");

    let state = AppState::new(api);
    let app = router::app(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind address");
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
