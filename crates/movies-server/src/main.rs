//! Binary entrypoint for the movie catalog HTTP server.
//!
//! Reads configuration from environment variables:
//! - `MOVIES_HOST`: Bind address (default: "0.0.0.0")
//! - `MOVIES_PORT`: Server listen port (default: "8080")
//! - `MOVIES_ID_STRATEGY`: "count" or "monotonic" (default: "count")

use std::process::ExitCode;

use movies_storage::MovieStore;
use tracing_subscriber::EnvFilter;

use movies_server::config::ServerConfig;
use movies_server::router::build_router;
use movies_server::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("starting movie catalog");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::seeded(config.id_strategy);
    let populated = state.store.lock().await.len();
    tracing::info!(
        id_strategy = %config.id_strategy,
        "movies populated with {} records",
        populated
    );

    let app = build_router(state);

    let addr = config.addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {}: {}", addr, err);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("movie catalog listening on {}", addr);

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
