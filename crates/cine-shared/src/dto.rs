//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Query string of `GET /user/profile/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileParams {
    pub year: i32,
    pub month: u32,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "health-check")]
    pub health_check: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            health_check: "ok".to_string(),
        }
    }
}

/// Body of `GET /ping/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

impl PingResponse {
    pub fn pong() -> Self {
        Self {
            message: "pong".to_string(),
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
