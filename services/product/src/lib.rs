//! product-service - 商品服务
//!
//! 同一个 [`application::ProductService`] 实例同时通过 HTTP/JSON 与 gRPC 两种协议对外提供

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

// 引入生成的 proto 代码
pub mod proto {
    tonic::include_proto!("mercato.product.v1");
}
