//! Liveness endpoints.

use actix_web::HttpResponse;
use cine_shared::dto::{HealthResponse, PingResponse, StatusResponse};

/// GET /
pub async fn status() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse::ok())
}

/// GET /ping/
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(PingResponse::pong())
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check() -> HttpResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
