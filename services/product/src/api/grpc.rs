//! 商品 gRPC 接口
//!
//! 业务 RPC 挂在认证拦截器之后；健康检查单独注册，不经过拦截器

use std::sync::Arc;

use mercato_bootstrap::AuthInterceptor;
use mercato_errors::AppError;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tonic::{Request, Response, Status};
use tracing::error;

use super::{format_timestamp, validate_product_id};
use crate::application::ProductService;
use crate::domain::{NewProduct, Product};
use crate::proto;
use crate::proto::health_check_response::ServingStatus;
use crate::proto::health_service_server::{HealthService as HealthRpc, HealthServiceServer};
use crate::proto::product_service_server::{ProductService as ProductRpc, ProductServiceServer};

const MSG_CREATE_FAILED: &str = "failed to create product";
const MSG_DELETE_FAILED: &str = "failed to delete product";
const MSG_LIST_FAILED: &str = "failed to get products";

impl From<Product> for proto::Product {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            created_at: format_timestamp(&p.created_at),
            updated_at: format_timestamp(&p.updated_at),
            name: p.name,
            description: p.description,
            price: p.price,
            stock: p.stock,
        }
    }
}

/// 基础设施错误统一返回固定信息，业务错误保留原信息
fn service_error(err: AppError, public: &'static str) -> Status {
    if err.is_infrastructure() {
        error!(error = %err, "{}", public);
        Status::internal(public)
    } else {
        err.into()
    }
}

pub struct ProductGrpcService {
    service: Arc<ProductService>,
}

impl ProductGrpcService {
    pub fn new(service: Arc<ProductService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl ProductRpc for ProductGrpcService {
    async fn create_product(
        &self,
        request: Request<proto::CreateProductRequest>,
    ) -> Result<Response<proto::ProductResponse>, Status> {
        let req = request.into_inner();

        let product = self
            .service
            .create_product(NewProduct::new(req.name, req.description, req.price, req.stock))
            .await
            .map_err(|e| service_error(e, MSG_CREATE_FAILED))?;

        Ok(Response::new(proto::ProductResponse {
            product: Some(product.into()),
        }))
    }

    async fn delete_product(
        &self,
        request: Request<proto::DeleteProductRequest>,
    ) -> Result<Response<proto::DeleteProductResponse>, Status> {
        let id = validate_product_id(request.into_inner().id)?;

        self.service
            .delete_product(id)
            .await
            .map_err(|e| service_error(e, MSG_DELETE_FAILED))?;

        Ok(Response::new(proto::DeleteProductResponse { success: true }))
    }

    async fn get_all_products(
        &self,
        _request: Request<proto::GetAllProductsRequest>,
    ) -> Result<Response<proto::GetAllProductsResponse>, Status> {
        let products = self
            .service
            .get_all_products()
            .await
            .map_err(|e| service_error(e, MSG_LIST_FAILED))?;

        Ok(Response::new(proto::GetAllProductsResponse {
            products: products.into_iter().map(proto::Product::from).collect(),
        }))
    }
}

/// gRPC 健康检查，进程存活即 SERVING
#[derive(Debug, Default)]
pub struct HealthGrpcService;

#[tonic::async_trait]
impl HealthRpc for HealthGrpcService {
    async fn check(
        &self,
        _request: Request<proto::HealthCheckRequest>,
    ) -> Result<Response<proto::HealthCheckResponse>, Status> {
        Ok(Response::new(proto::HealthCheckResponse {
            status: ServingStatus::Serving as i32,
        }))
    }
}

/// 组装 gRPC 路由
pub fn grpc_router(service: Arc<ProductService>, interceptor: AuthInterceptor) -> Router {
    Server::builder()
        .add_service(HealthServiceServer::new(HealthGrpcService))
        .add_service(ProductServiceServer::with_interceptor(
            ProductGrpcService::new(service),
            interceptor,
        ))
}
