//! 对外接口：HTTP/JSON 与 gRPC 两个适配层

pub mod grpc;
pub mod http;

use std::sync::Arc;

use axum::{Router, middleware};
use chrono::{DateTime, Utc};
use mercato_bootstrap::{HealthChecker, health_routes, http_metrics_middleware};
use mercato_errors::{AppError, AppResult};
use tower_http::trace::TraceLayer;

use crate::application::ProductService;

/// HTTP API 前缀
pub const API_PREFIX: &str = "/api/v1";

/// 对外时间格式（UTC）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// 删除接口的 id 必须非负
pub fn validate_product_id(id: i64) -> AppResult<i64> {
    if id < 0 {
        return Err(AppError::validation("product id must not be negative"));
    }
    Ok(id)
}

/// 完整的 HTTP 应用：业务路由与健康检查挂在 `/api/v1` 下
pub fn http_app(service: Arc<ProductService>, checker: Arc<HealthChecker>) -> Router {
    let api = http::routes(service).merge(health_routes(checker));

    Router::new()
        .nest(API_PREFIX, api)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-09 07:05:01");
    }

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id(0).unwrap(), 0);
        assert!(matches!(
            validate_product_id(-1),
            Err(AppError::Validation(_))
        ));
    }
}
