use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mercato_errors::AppResult;

use super::{NewUser, User};

/// 用户仓储
///
/// 用户名或邮箱重复时 `create` 返回 `Conflict`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser, now: DateTime<Utc>) -> AppResult<User>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;
}
