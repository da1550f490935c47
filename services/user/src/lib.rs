//! user-service - 用户服务
//!
//! 注册、登录、登出；启动时连接 Product 服务的 gRPC 接口

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

// Product 服务的 gRPC 客户端
pub mod proto {
    tonic::include_proto!("mercato.product.v1");
}
