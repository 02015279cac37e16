//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::request_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::{CorsConfig, ServerConfig};

/// JSON 请求体上限
const BODY_LIMIT: usize = 1024 * 1024;

/// 根据配置构建 CORS 层
///
/// `*` 且不带凭据时放行任意来源；带凭据时回显请求来源；否则按逗号分隔的列表放行
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.origin.trim() == "*" {
        if config.credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::from(Any)
        }
    } else {
        let origins: Vec<HeaderValue> = config
            .origin
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(config.credentials)
        .max_age(Duration::from_secs(3600))
}

/// 构建完整的 Router（路由、中间件与状态）
pub fn build_router(state: Arc<AppState>, cors: &CorsConfig) -> Router {
    create_routes()
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    cors: CorsConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, cors: CorsConfig, state: AppState) -> Self {
        Self {
            config,
            cors,
            state: Arc::new(state),
        }
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state.clone(), &self.cors);
        let addr = self.config.addr();

        info!(
            environment = self.config.environment.as_str(),
            "Starting HTTP server on {}", addr
        );

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
