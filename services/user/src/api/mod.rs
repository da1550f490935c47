//! HTTP 接口

pub mod http;

use std::sync::Arc;

use axum::{Router, middleware};
use mercato_bootstrap::{HealthChecker, health_routes, http_metrics_middleware};
use tower_http::trace::TraceLayer;

use crate::application::UserService;

/// HTTP API 前缀
pub const API_PREFIX: &str = "/api";

/// 对外时间格式（UTC）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 完整的 HTTP 应用：认证路由与健康检查挂在 `/api` 下
pub fn http_app(service: Arc<UserService>, checker: Arc<HealthChecker>) -> Router {
    let api = http::routes(service).merge(health_routes(checker));

    Router::new()
        .nest(API_PREFIX, api)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
