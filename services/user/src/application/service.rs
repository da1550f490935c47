use std::sync::Arc;

use chrono::Utc;
use mercato_errors::{AppError, AppResult};
use tonic::transport::Channel;
use tracing::info;

use crate::domain::{
    MSG_EMAIL_TAKEN, MSG_INVALID_CREDENTIALS, MSG_USERNAME_TAKEN, NewUser, PasswordHasher, User,
    UserRepository,
};
use crate::proto::product_service_client::ProductServiceClient;

/// 用户业务服务
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    product_client: ProductServiceClient<Channel>,
}

impl UserService {
    pub fn new(
        repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        product_client: ProductServiceClient<Channel>,
    ) -> Self {
        Self {
            repo,
            hasher,
            product_client,
        }
    }

    /// 注册
    ///
    /// 先检查用户名，再检查邮箱；并发注册由存储的唯一约束兜底
    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::validation(
                "username, email and password are required",
            ));
        }

        if self.repo.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(MSG_USERNAME_TAKEN));
        }
        if self.repo.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict(MSG_EMAIL_TAKEN));
        }

        let new_user = NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: self.hasher.hash(password)?,
        };

        let user = self.repo.create(&new_user, Utc::now()).await?;
        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// 登录
    ///
    /// 用户不存在与密码错误返回同一个错误
    pub async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthorized(MSG_INVALID_CREDENTIALS))?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AppError::unauthorized(MSG_INVALID_CREDENTIALS));
        }

        info!(user_id = user.id, "User logged in");
        Ok(user)
    }

    /// 登出（无状态，总是成功）
    pub async fn logout(&self) -> AppResult<()> {
        Ok(())
    }

    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("user {} not found", id)))
    }

    /// Product 服务客户端（共享同一个连接）
    pub fn product_client(&self) -> ProductServiceClient<Channel> {
        self.product_client.clone()
    }
}
