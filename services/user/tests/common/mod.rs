#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mercato_bootstrap::lazy_channel;
use mercato_errors::{AppError, AppResult};
use user_service::application::UserService;
use user_service::domain::{
    Argon2Hasher, MSG_EMAIL_TAKEN, MSG_USERNAME_TAKEN, NewUser, User, UserRepository,
};
use user_service::proto::product_service_client::ProductServiceClient;

/// 内存用户仓储，和数据库一样强制用户名、邮箱唯一
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser, now: DateTime<Utc>) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::conflict(MSG_USERNAME_TAKEN));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::conflict(MSG_EMAIL_TAKEN));
        }

        let user = user.clone().into_user(users.len() as i64 + 1, now);
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

/// 存储不可用
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _user: &NewUser, _now: DateTime<Utc>) -> AppResult<User> {
        Err(AppError::database("connection refused on 10.1.2.3:5432"))
    }

    async fn find_by_username(&self, _username: &str) -> AppResult<Option<User>> {
        Err(AppError::database("connection refused on 10.1.2.3:5432"))
    }

    async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
        Err(AppError::database("connection refused on 10.1.2.3:5432"))
    }

    async fn find_by_id(&self, _id: i64) -> AppResult<Option<User>> {
        Err(AppError::database("connection refused on 10.1.2.3:5432"))
    }
}

/// 使用延迟连接的 Product 客户端，测试中不会真正拨号
pub fn user_service(repo: Arc<dyn UserRepository>) -> Arc<UserService> {
    let client = ProductServiceClient::new(lazy_channel("http://127.0.0.1:50051").unwrap());
    Arc::new(UserService::new(repo, Arc::new(Argon2Hasher), client))
}

pub fn in_memory_service() -> Arc<UserService> {
    user_service(Arc::new(InMemoryUserRepository::default()))
}

pub fn failing_service() -> Arc<UserService> {
    user_service(Arc::new(FailingUserRepository))
}
