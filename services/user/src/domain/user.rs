use chrono::{DateTime, Utc};

/// 用户
///
/// `password_hash` 为 argon2 PHC 字符串，不对外输出
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待持久化的用户，密码已哈希
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn into_user(self, id: i64, now: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

pub const MSG_USERNAME_TAKEN: &str = "username already exists";
pub const MSG_EMAIL_TAKEN: &str = "email already exists";
pub const MSG_INVALID_CREDENTIALS: &str = "invalid credentials";
