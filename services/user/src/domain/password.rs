//! 密码哈希

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use mercato_errors::{AppError, AppResult};

/// 单向密码哈希
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// 生成哈希
    fn hash(&self, password: &str) -> AppResult<String>;

    /// 校验明文与哈希是否匹配
    fn verify(&self, password: &str, hash: &str) -> AppResult<bool>;
}

/// Argon2 默认参数，PHC 字符串格式
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
