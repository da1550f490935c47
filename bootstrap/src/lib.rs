//! mercato-bootstrap - 统一服务启动骨架
//!
//! 两个服务复用的启动逻辑：运行时初始化、数据库连接与迁移、
//! HTTP / gRPC 监听、健康检查、gRPC 认证拦截器

mod client;
mod database;
mod health;
mod interceptor;
mod metrics;
mod runtime;
mod server;

pub use client::*;
pub use database::*;
pub use health::*;
pub use interceptor::*;
pub use metrics::*;
pub use runtime::*;
pub use server::*;
