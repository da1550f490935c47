//! PostgreSQL 商品仓储

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mercato_adapter_postgres::database_error;
use mercato_errors::AppResult;
use sqlx::PgPool;

use super::rows::ProductRow;
use crate::domain::{NewProduct, Product, ProductRepository};

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: &NewProduct, now: DateTime<Utc>) -> AppResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, description, price, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, name, description, price, stock, created_at, updated_at
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("insert product", e))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("delete product", e))?;

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, stock, created_at, updated_at
            FROM products
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("list products", e))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}
