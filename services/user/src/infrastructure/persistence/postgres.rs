//! PostgreSQL 用户仓储

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mercato_adapter_postgres::{database_error, unique_violation};
use mercato_errors::{AppError, AppResult};
use sqlx::PgPool;

use super::rows::UserRow;
use crate::domain::{MSG_EMAIL_TAKEN, MSG_USERNAME_TAKEN, NewUser, User, UserRepository};

const EMAIL_CONSTRAINT: &str = "users_email_key";

const SELECT_USER: &str =
    "SELECT id, username, email, password_hash, created_at, updated_at FROM users";

/// 按约束名给出与预检查相同的 Conflict
fn constraint_conflict(constraint: &str) -> AppError {
    match constraint {
        EMAIL_CONSTRAINT => AppError::conflict(MSG_EMAIL_TAKEN),
        // 其余唯一约束只有 users_username_key
        _ => AppError::conflict(MSG_USERNAME_TAKEN),
    }
}

fn insert_error(err: sqlx::Error) -> AppError {
    match unique_violation(&err) {
        Some(constraint) => constraint_conflict(constraint),
        None => database_error("insert user", err),
    }
}

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> AppResult<Option<User>> {
        let sql = format!("{} WHERE {} = $1", SELECT_USER, column);

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find user", e))?;

        Ok(row.map(User::from))
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser, now: DateTime<Utc>) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(row.into())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one("email", email).await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{} WHERE id = $1", SELECT_USER))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("find user", e))?;

        Ok(row.map(User::from))
    }
}
