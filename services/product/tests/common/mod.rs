#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mercato_errors::{AppError, AppResult};
use product_service::application::ProductService;
use product_service::domain::{NewProduct, Product, ProductRepository};

/// 内存商品仓储，id 从 1 开始递增
#[derive(Default)]
pub struct InMemoryProductRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    products: Vec<Product>,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &NewProduct, now: DateTime<Utc>) -> AppResult<Product> {
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let product = product.clone().into_product(state.last_id, now);
        state.products.push(product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.state.lock().unwrap().products.retain(|p| p.id != id);
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.state.lock().unwrap().products.clone())
    }
}

/// 所有操作都返回数据库错误
pub struct FailingProductRepository;

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn create(&self, _product: &NewProduct, _now: DateTime<Utc>) -> AppResult<Product> {
        Err(AppError::database("connection refused on 10.1.2.3:5432"))
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Err(AppError::database("connection refused on 10.1.2.3:5432"))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Err(AppError::database("connection refused on 10.1.2.3:5432"))
    }
}

pub fn in_memory_service() -> Arc<ProductService> {
    Arc::new(ProductService::new(Arc::new(
        InMemoryProductRepository::default(),
    )))
}

pub fn failing_service() -> Arc<ProductService> {
    Arc::new(ProductService::new(Arc::new(FailingProductRepository)))
}
