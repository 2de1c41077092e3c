use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::sync::Arc;

use crate::{ApiState, SERVICE_NAME, routes::webhook::WEBHOOK_PATHS};

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    timezone: String,
    courses: usize,
    timestamp: String,
}

#[derive(Serialize)]
struct VersionResponse {
    version: String,
}

#[derive(Serialize)]
struct ServiceInfoResponse {
    service: String,
    timezone: String,
    courses_configured: usize,
    endpoints: Vec<&'static str>,
    status: String,
}

async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    let now = state.clock.now();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timezone: now.timezone().name().to_string(),
        courses: state.courses.len(),
        timestamp: now.to_rfc3339(),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn service_info(State(state): State<Arc<ApiState>>) -> Json<ServiceInfoResponse> {
    let mut endpoints = WEBHOOK_PATHS.to_vec();
    endpoints.extend(["/admin/courses", "/health"]);

    Json(ServiceInfoResponse {
        service: format!("{} - Webhook Server", SERVICE_NAME),
        timezone: state.timezone_name().to_string(),
        courses_configured: state.courses.len(),
        endpoints,
        status: "active".to_string(),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/version", get(version))
}
