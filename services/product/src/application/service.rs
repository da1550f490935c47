use std::sync::Arc;

use chrono::Utc;
use mercato_errors::AppResult;
use tracing::info;

use crate::domain::{NewProduct, Product, ProductRepository};

/// 商品业务服务
///
/// HTTP 与 gRPC 两个入口共享同一个实例
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// 创建商品
    pub async fn create_product(&self, input: NewProduct) -> AppResult<Product> {
        input.validate()?;

        let product = self.repo.create(&input, Utc::now()).await?;
        info!(product_id = product.id, "Product created");
        Ok(product)
    }

    /// 删除商品
    pub async fn delete_product(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await?;
        info!(product_id = id, "Product deleted");
        Ok(())
    }

    /// 列出全部商品
    pub async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        self.repo.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockProductRepository;
    use mercato_errors::AppError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_create_product_persists_valid_input() {
        let mut repo = MockProductRepository::new();
        repo.expect_create()
            .withf(|input, _| input.name == "Pen" && input.stock == 10)
            .times(1)
            .returning(|input, now| Ok(input.clone().into_product(1, now)));

        let service = ProductService::new(Arc::new(repo));
        let product = service
            .create_product(NewProduct::new("Pen", "Blue", 1.5, 10))
            .await
            .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[tokio::test]
    async fn test_create_product_rejects_negative_stock_without_persisting() {
        let mut repo = MockProductRepository::new();
        repo.expect_create().never();

        let service = ProductService::new(Arc::new(repo));
        let err = service
            .create_product(NewProduct::new("Pen", "Blue", 1.5, -3))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_product_passes_store_errors_through() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete()
            .with(eq(42))
            .times(1)
            .returning(|_| Err(AppError::database("connection reset")));

        let service = ProductService::new(Arc::new(repo));
        let err = service.delete_product(42).await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_get_all_products_returns_store_order() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all().times(1).returning(|| {
            let now = Utc::now();
            Ok(vec![
                NewProduct::new("A", "", 1.0, 1).into_product(1, now),
                NewProduct::new("B", "", 2.0, 2).into_product(2, now),
            ])
        });

        let service = ProductService::new(Arc::new(repo));
        let products = service.get_all_products().await.unwrap();

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
