use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mercato_errors::AppResult;

use super::{NewProduct, Product};

/// 商品仓储
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 持久化新商品，`now` 同时作为 created_at 与 updated_at
    async fn create(&self, product: &NewProduct, now: DateTime<Utc>) -> AppResult<Product>;

    /// 删除商品；id 不存在时同样返回 Ok
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// 按 id 升序返回全部商品
    async fn find_all(&self) -> AppResult<Vec<Product>>;
}
