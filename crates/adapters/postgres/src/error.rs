//! sqlx 错误转换

use mercato_errors::AppError;

/// 唯一约束冲突时返回触发的约束名
///
/// 约束名缺失时返回空字符串，非唯一约束错误返回 None
pub fn unique_violation(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            Some(db.constraint().unwrap_or_default())
        }
        _ => None,
    }
}

/// 将 sqlx 错误转换为数据库错误，附带操作描述
pub fn database_error(operation: &str, err: sqlx::Error) -> AppError {
    AppError::database(format!("{}: {}", operation, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(unique_violation(&sqlx::Error::RowNotFound).is_none());
    }

    #[test]
    fn test_database_error_keeps_operation() {
        let err = database_error("insert product", sqlx::Error::PoolTimedOut);
        assert!(err.is_infrastructure());
        assert!(err.message().starts_with("insert product: "));
    }
}
