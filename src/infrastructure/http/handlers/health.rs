//! Health Handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    /// 进程运行秒数
    pub uptime: f64,
    pub environment: &'static str,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(
        HealthResponse {
            status: "healthy",
            timestamp: Utc::now(),
            uptime: state.started_at.elapsed().as_secs_f64(),
            environment: state.environment.as_str(),
        },
        "Service is healthy",
    ))
}

/// GET /health/ping
pub async fn ping() -> &'static str {
    "pong"
}
