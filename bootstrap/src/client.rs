//! gRPC 客户端通道

use std::time::Duration;

use mercato_errors::{AppError, AppResult};
use tonic::transport::{Channel, Endpoint};
use tracing::info;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

fn endpoint(uri: &str) -> AppResult<Endpoint> {
    Endpoint::from_shared(uri.to_string())
        .map(|e| e.connect_timeout(CONNECT_TIMEOUT))
        .map_err(|e| AppError::validation(format!("Invalid gRPC endpoint {}: {}", uri, e)))
}

/// 立即建立 gRPC 连接
///
/// 失败时直接返回错误，不做重试
pub async fn connect_channel(uri: &str) -> AppResult<Channel> {
    let channel = endpoint(uri)?.connect().await.map_err(|e| {
        AppError::external_service(format!("Failed to connect to {}: {}", uri, e))
    })?;

    info!(endpoint = %uri, "gRPC channel connected");
    Ok(channel)
}

/// 延迟建立连接的通道，首次调用时才拨号
pub fn lazy_channel(uri: &str) -> AppResult<Channel> {
    Ok(endpoint(uri)?.connect_lazy())
}
