//! Service metadata and liveness handlers.

use axum::Json;

use crate::api::schemas::{HealthResponse, ServiceInfoResponse};

/// `GET /` returns the service name and version.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: env!("CARGO_PKG_NAME").to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

/// `GET /health` reports process liveness.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
    })
}
