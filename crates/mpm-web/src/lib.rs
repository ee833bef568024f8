//! MPM Web Server
//!
//! Axum-based REST API for the machine & parts inventory.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::future::Future;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(routes::system::root))
        // Parts
        .route("/parts", post(routes::parts::create_part))
        .route("/parts/", post(routes::parts::create_part))
        .route("/parts/{id}", get(routes::parts::get_part))
        .route("/parts/{id}/drawing", get(routes::parts::get_part_drawing))
        // Machines
        .route("/machines", post(routes::machines::create_machine))
        .route("/machines/", post(routes::machines::create_machine))
        .route("/machines/associate", post(routes::machines::associate_part))
        .route("/machines/{name}/sites/{site}", get(routes::machines::get_machine_with_parts))
        // System
        .route("/inventory/stats", get(routes::system::inventory_stats))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server until `shutdown` resolves.
///
/// `host` may be an IP address or a resolvable name such as `localhost`.
pub async fn run_server<F>(state: AppState, host: &str, port: u16, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}
