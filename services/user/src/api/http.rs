//! 认证接口：注册、登录、登出

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use mercato_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use super::TIMESTAMP_FORMAT;
use crate::application::UserService;
use crate::domain::User;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 用户 JSON 表示，不包含密码
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            created_at: u.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: u.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(service)
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::validation(e.body_text()))
}

/// 注册：业务错误（重复、字段缺失）统一返回 400
async fn register(
    State(service): State<Arc<UserService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<StatusCode, Response> {
    let req = decode(payload).map_err(IntoResponse::into_response)?;

    match service
        .register(&req.username, &req.email, &req.password)
        .await
    {
        Ok(_) => Ok(StatusCode::CREATED),
        Err(e) if e.is_infrastructure() => Err(e.into_response()),
        Err(e) => Err(e
            .to_problem_details()
            .with_status(StatusCode::BAD_REQUEST)
            .into_response()),
    }
}

async fn login(
    State(service): State<Arc<UserService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<UserResponse>> {
    let req = decode(payload)?;
    let user = service.login(&req.username, &req.password).await?;
    Ok(Json(user.into()))
}

async fn logout(State(service): State<Arc<UserService>>) -> AppResult<StatusCode> {
    service.logout().await?;
    Ok(StatusCode::OK)
}
