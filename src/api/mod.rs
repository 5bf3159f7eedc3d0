//! HTTP boundary for the task lifecycle service.
//!
//! [`build_router`] wires the route table onto shared [`ApiState`], and
//! [`serve`] binds a listener and runs the application. The CORS layer
//! is built separately from configured origins so tests can exercise
//! the router without it.

pub mod error;
pub mod routes;
pub mod schemas;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use mockable::Clock;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub use error::{ApiError, ApiErrorResponse};
pub use state::ApiState;

use crate::task::ports::TaskStore;

/// Builds the application router on top of shared handler state.
#[must_use]
pub fn build_router<S, C>(state: ApiState<S, C>) -> Router
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(routes::health::service_info))
        .route("/health", get(routes::health::health))
        .route(
            "/api/v1/tasks",
            get(routes::tasks::list_tasks::<S, C>).post(routes::tasks::create_task::<S, C>),
        )
        .route(
            "/api/v1/tasks/{id}",
            get(routes::tasks::get_task::<S, C>)
                .put(routes::tasks::update_task::<S, C>)
                .delete(routes::tasks::delete_task::<S, C>),
        )
        .with_state(state)
}

/// Builds the CORS layer for the configured origins.
///
/// A literal `*` entry permits any origin; otherwise only the listed
/// origins are allowed. Malformed entries are logged and skipped.
#[must_use]
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|_| tracing::warn!(%origin, "ignoring malformed CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Binds `addr` and serves `router` until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an I/O error when binding the listener or serving fails.
pub async fn serve(addr: SocketAddr, router: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "task API listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("task API stopped");
    Ok(())
}

/// Resolves when the process receives a Ctrl+C / SIGINT.
///
/// If the signal handler cannot be installed the future logs the failure
/// and never resolves, leaving the server running without signal support.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install shutdown signal handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
