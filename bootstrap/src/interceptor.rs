//! gRPC 认证拦截器
//!
//! 拦截器只检查 `authorization` 元数据是否存在且非空，不解析、不校验 token。
//! 真正的 token 校验通过 [`CredentialVerifier`] 接入，默认实现 [`PresenceOnly`]
//! 接受任意非空 token。

use std::sync::Arc;

use tonic::metadata::MetadataMap;
use tonic::service::Interceptor;
use tonic::{Request, Status};
use tracing::debug;

use crate::metrics::record_auth_rejection;

/// 凭证所在的元数据键
pub const AUTHORIZATION_KEY: &str = "authorization";

pub const MSG_METADATA_MISSING: &str = "metadata is not provided";
pub const MSG_TOKEN_MISSING: &str = "authorization token is not provided";
pub const MSG_INVALID_TOKEN: &str = "invalid token";

/// 凭证校验扩展点
///
/// 在存在性检查通过之后调用，返回 Err 时请求被拒绝
pub trait CredentialVerifier: Send + Sync + 'static {
    fn verify(&self, token: &str) -> Result<(), Status>;
}

/// 只要求凭证存在，不校验内容
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceOnly;

impl CredentialVerifier for PresenceOnly {
    fn verify(&self, _token: &str) -> Result<(), Status> {
        Ok(())
    }
}

/// 认证拦截器
#[derive(Clone)]
pub struct AuthInterceptor {
    verifier: Arc<dyn CredentialVerifier>,
}

impl AuthInterceptor {
    /// 仅做存在性检查的拦截器
    pub fn new() -> Self {
        Self::with_verifier(PresenceOnly)
    }

    /// 使用自定义校验器
    pub fn with_verifier(verifier: impl CredentialVerifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }
}

impl Default for AuthInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInterceptor").finish_non_exhaustive()
    }
}

impl Interceptor for AuthInterceptor {
    #[allow(clippy::result_large_err)]
    fn call(&mut self, request: Request<()>) -> Result<Request<()>, Status> {
        let token = extract_credential(request.metadata()).inspect_err(|status| {
            // 只记录拒绝原因，不记录凭证内容
            debug!(reason = status.message(), "gRPC call rejected");
            record_auth_rejection(status.message());
        })?;

        self.verifier.verify(token).inspect_err(|status| {
            debug!(reason = status.message(), "gRPC credential verification failed");
            record_auth_rejection("verification failed");
        })?;

        Ok(request)
    }
}

/// 从元数据中取出第一个 authorization 值
#[allow(clippy::result_large_err)]
pub fn extract_credential(metadata: &MetadataMap) -> Result<&str, Status> {
    if metadata.is_empty() {
        return Err(Status::unauthenticated(MSG_METADATA_MISSING));
    }

    let first = metadata
        .get_all(AUTHORIZATION_KEY)
        .iter()
        .next()
        .ok_or_else(|| Status::unauthenticated(MSG_TOKEN_MISSING))?;

    // 非 ASCII 的值同样视为无效 token
    let token = first
        .to_str()
        .map_err(|_| Status::unauthenticated(MSG_INVALID_TOKEN))?;

    if token.is_empty() {
        return Err(Status::unauthenticated(MSG_INVALID_TOKEN));
    }

    Ok(token)
}
