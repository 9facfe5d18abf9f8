//! Back-office API for the institute's marketing site.
//!
//!
//!
//! # General Infrastructure
//! - Public frontend renders pages from `GET /technologies` and `GET /combinations`
//! - The Course Explorer posts the user's selection to `POST /explore` on every chip change
//! - The inquiry form posts leads to `POST /inquiries`; staff read them back from `GET /inquiries`
//! - Admin edits land in the catalog file (or its mirror); `POST /admin/refresh` drops the
//!   cached snapshot so the next read sees them immediately instead of waiting out the TTL
//!
//!
//!
//! # Catalog Caching
//!
//! **Goal**: the catalog changes a few times a day at most, the explorer is hit on every
//! selection change. Re-reading the store per request is pure waste.
//!
//! - One catalog snapshot is cached in memory behind a TTL
//! - Every handler takes the whole snapshot once and computes over it, so an admin write
//!   mid-request can never produce a half-old half-new view
//! - The cache is a performance nicety, not a correctness mechanism; a stale read is
//!   acceptable for the length of the TTL
//!
//!
//!
//! # Notes
//!
//! ## Matching policy
//! The explorer reports a curated combination only on exact set equality with the
//! selection. Subset matching was considered and rejected: a "Perfect Match" badge on a
//! partial overlap misleads the user.
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod cache;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use routes::{
    combinations_handler, create_inquiry_handler, explore_handler, list_inquiries_handler,
    refresh_handler, technologies_handler,
};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await;

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/technologies", get(technologies_handler))
        .route("/combinations", get(combinations_handler))
        .route("/explore", post(explore_handler))
        .route(
            "/inquiries",
            post(create_inquiry_handler).get(list_inquiries_handler),
        )
        .route("/admin/refresh", post(refresh_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
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
