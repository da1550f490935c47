//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出与请求计数

use axum::{
    Router,
    extract::Request,
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::counter;
use metrics_exporter_prometheus::PrometheusHandle;

/// `/metrics` 路由
pub fn metrics_routes(handle: PrometheusHandle) -> Router {
    Router::new().route(
        "/metrics",
        get(move || {
            let handle = handle.clone();
            async move { handle.render() }
        }),
    )
}

/// 记录被认证拦截器拒绝的 gRPC 请求
pub fn record_auth_rejection(reason: &str) {
    counter!("grpc_auth_rejections_total", "reason" => reason.to_string()).increment(1);
}

/// 记录 HTTP 请求
pub fn record_http_request(method: &str, status: u16) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    if status >= 500 {
        counter!("http_requests_failed_total", &labels).increment(1);
    }
}

/// HTTP 请求计数中间件
pub async fn http_metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let response = next.run(request).await;
    record_http_request(method.as_str(), response.status().as_u16());
    response
}
