//! Documentation of a recipe finder API.
//!
//! A single read-only endpoint serving a fixed catalog of recipes, optionally
//! narrowed by a search term. The frontend fetches once on load and again on
//! every submitted search.
//!
//!
//!
//! # Endpoints
//!
//! | Method | Path                             | Response                   |
//! |--------|----------------------------------|----------------------------|
//! | GET    | `/api/v1/recipes`                | every recipe               |
//! | GET    | `/api/v1/recipes?search=chicken` | recipes matching `chicken` |
//! | GET    | `/`                              | same as `/api/v1/recipes`  |
//!
//! The body is always a bare JSON array. A query string that cannot be parsed,
//! such as `search` given twice, is answered with `400 Bad Request`.
//!
//! See [`search`] for the matching rules.
//!
//!
//!
//! # Catalog
//!
//! Loaded once at startup into [`state::AppState`] and shared by every request.
//! Nothing mutates it, so requests never coordinate with each other.
//!
//!
//!
//! # Configuration
//!
//! - `RUST_PORT`: listening port, default `3001`
//! - `CORS_ORIGINS`: comma-separated allowed origins, default is the local dev
//!   server plus the deployed frontend
//! - `RECIPES_CATALOG`: optional path to a JSON catalog, see [`bank`]
//! - `RUST_LOG`: tracing filter, e.g. `RUST_LOG=recipes=debug,tower_http=debug`
//!
//!
//!
//! # Setup
//!
//! Run the server.
//! ```sh
//! RUST_LOG=info cargo run -p recipes-backend
//! ```
//!
//! Query it.
//! ```sh
//! curl 'http://localhost:3001/api/v1/recipes?search=cheese'
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    Router,
    http::Method,
    routing::get,
};
use signal::ctrl_c;
#[cfg(unix)]
use signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod search;
pub mod state;

use config::Config;
use routes::{RECIPES_PATH, recipes_handler};
use state::AppState;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::load(config).context("Catalog misconfigured")?;

    info!("Starting server...");
    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(recipes_handler))
        .route(RECIPES_PATH, get(recipes_handler))
        .layer(cors(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.clone()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
            Method::HEAD,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .max_age(Duration::from_secs(60 * 60))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
