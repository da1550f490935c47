//! mercato-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范，同时提供到 HTTP 与 gRPC 状态码的映射

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 基础设施类错误对外统一展示的信息
const GENERIC_INTERNAL_MESSAGE: &str = "internal server error";

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn external_service(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    /// 是否为基础设施错误（数据库、内部故障、下游服务）
    ///
    /// 这类错误只在服务端记录，不向调用方返回原始信息
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::Internal(_) | Self::Database(_) | Self::ExternalService(_)
        )
    }

    /// 错误携带的原始信息（不含分类前缀）
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(m)
            | Self::Validation(m)
            | Self::Unauthorized(m)
            | Self::Unauthenticated(m)
            | Self::Conflict(m)
            | Self::Internal(m)
            | Self::Database(m)
            | Self::ExternalService(m) => m,
        }
    }

    /// 可以返回给调用方的信息
    pub fn public_message(&self) -> &str {
        if self.is_infrastructure() {
            GENERIC_INTERNAL_MESSAGE
        } else {
            self.message()
        }
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Unauthenticated(_) => 401,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
            Self::Database(_) => 500,
            Self::ExternalService(_) => 502,
        }
    }

    /// 转换为 gRPC 状态码
    pub fn grpc_code(&self) -> tonic::Code {
        match self {
            Self::NotFound(_) => tonic::Code::NotFound,
            Self::Validation(_) => tonic::Code::InvalidArgument,
            Self::Unauthorized(_) => tonic::Code::Unauthenticated,
            Self::Unauthenticated(_) => tonic::Code::Unauthenticated,
            Self::Conflict(_) => tonic::Code::AlreadyExists,
            Self::Internal(_) => tonic::Code::Internal,
            Self::Database(_) => tonic::Code::Internal,
            Self::ExternalService(_) => tonic::Code::Unavailable,
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title().to_string(),
            status: self.status_code(),
            detail: self.public_message().to_string(),
            instance: None,
        }
    }

    fn problem_type(&self) -> String {
        let slug = match self {
            Self::NotFound(_) => "not-found",
            Self::Validation(_) => "validation",
            Self::Unauthorized(_) => "unauthorized",
            Self::Unauthenticated(_) => "unauthenticated",
            Self::Conflict(_) => "conflict",
            Self::Internal(_) => "internal",
            Self::Database(_) => "database",
            Self::ExternalService(_) => "external-service",
        };
        format!("urn:mercato:problem:{}", slug)
    }

    fn problem_title(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Resource Not Found",
            Self::Validation(_) => "Validation Error",
            Self::Unauthorized(_) => "Unauthorized",
            Self::Unauthenticated(_) => "Unauthenticated",
            Self::Conflict(_) => "Conflict",
            Self::Internal(_) => "Internal Server Error",
            Self::Database(_) => "Database Error",
            Self::ExternalService(_) => "External Service Error",
        }
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        if err.is_infrastructure() {
            tracing::error!(error = %err, "Request failed");
        }
        tonic::Status::new(err.grpc_code(), err.public_message())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_infrastructure() {
            tracing::error!(error = %self, "Request failed");
        }
        self.to_problem_details().into_response()
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ProblemDetails {
    /// 覆盖 HTTP 状态码（部分接口对业务错误统一返回 400）
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status.as_u16();
        self
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = serde_json::to_string(&self).unwrap_or_default();

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            body,
        )
            .into_response()
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
