//! HTTP / gRPC 监听器
//!
//! 同一个进程内并发运行两个监听器，任何一个绑定或运行失败都会让
//! [`serve_dual`] 返回错误，由调用方终止进程

use std::future::Future;
use std::net::SocketAddr;

use mercato_errors::{AppError, AppResult};
use tokio::net::TcpListener;
use tracing::info;

use crate::runtime::shutdown_signal;

/// 启动 HTTP 服务器
pub async fn serve_http<F>(addr: &str, router: axum::Router, signal: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        AppError::internal(format!("Failed to bind HTTP listener on {}: {}", addr, e))
    })?;

    info!(%addr, "HTTP server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(signal)
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {}", e)))?;

    info!(%addr, "HTTP server stopped");
    Ok(())
}

/// 启动 gRPC 服务器
pub async fn serve_grpc<F>(
    addr: &str,
    router: tonic::transport::server::Router,
    signal: F,
) -> AppResult<()>
where
    F: Future<Output = ()>,
{
    let socket_addr: SocketAddr = addr
        .parse()
        .map_err(|e| AppError::internal(format!("Invalid gRPC address {}: {}", addr, e)))?;

    info!(%socket_addr, "gRPC server starting");

    router
        .serve_with_shutdown(socket_addr, signal)
        .await
        .map_err(|e| AppError::internal(format!("gRPC server error on {}: {}", addr, e)))?;

    info!(%socket_addr, "gRPC server stopped");
    Ok(())
}

/// 同时运行 HTTP 与 gRPC 两个监听器，收到关闭信号后一起退出
pub async fn serve_dual(
    http_addr: &str,
    http_router: axum::Router,
    grpc_addr: &str,
    grpc_router: tonic::transport::server::Router,
) -> AppResult<()> {
    tokio::try_join!(
        serve_http(http_addr, http_router, shutdown_signal()),
        serve_grpc(grpc_addr, grpc_router, shutdown_signal()),
    )?;
    Ok(())
}
