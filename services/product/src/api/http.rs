//! 商品 HTTP 接口

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{delete, post},
};
use mercato_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use super::{format_timestamp, validate_product_id};
use crate::application::ProductService;
use crate::domain::{NewProduct, Product};

/// 创建商品请求，四个字段都必须出现
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

/// 商品 JSON 表示
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
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

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/products", post(create_product).get(get_products))
        .route("/products/{id}", delete(delete_product))
        .with_state(service)
}

async fn create_product(
    State(service): State<Arc<ProductService>>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> AppResult<Json<ProductResponse>> {
    let Json(req) = payload.map_err(|e| AppError::validation(e.body_text()))?;

    let product = service
        .create_product(NewProduct::new(req.name, req.description, req.price, req.stock))
        .await?;

    Ok(Json(product.into()))
}

async fn get_products(
    State(service): State<Arc<ProductService>>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = service.get_all_products().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_product_id(&raw_id)?;
    service.delete_product(id).await?;

    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}

fn parse_product_id(raw: &str) -> AppResult<i64> {
    let id = raw
        .parse::<i64>()
        .map_err(|e| AppError::validation(format!("invalid product id: {}", e)))?;
    validate_product_id(id)
}
