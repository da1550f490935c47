//! PostgreSQL 迁移管理模块
//!
//! 每个服务在代码中声明自己的 schema 迁移，启动时按版本顺序应用。
//! 已应用迁移的校验和发生变化视为错误，服务不得继续启动。

use std::collections::HashMap;

use mercato_errors::{AppError, AppResult};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use tracing::{info, warn};

/// 迁移记录
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MigrationRecord {
    /// 迁移版本
    pub version: i64,
    /// 迁移名称
    pub name: String,
    /// 应用时间
    pub applied_at: chrono::DateTime<chrono::Utc>,
    /// 校验和
    pub checksum: String,
}

/// 迁移定义
#[derive(Debug, Clone)]
pub struct Migration {
    /// 版本号
    pub version: i64,
    /// 名称
    pub name: String,
    /// 升级 SQL，可包含多条语句
    pub up_sql: String,
    /// 校验和
    pub checksum: String,
}

impl Migration {
    /// 创建新的迁移
    pub fn new(version: i64, name: impl Into<String>, up_sql: impl Into<String>) -> Self {
        let up_sql = up_sql.into();
        let checksum = Self::calculate_checksum(&up_sql);
        Self {
            version,
            name: name.into(),
            up_sql,
            checksum,
        }
    }

    /// SHA-256 校验和（十六进制）
    fn calculate_checksum(sql: &str) -> String {
        hex::encode(Sha256::digest(sql.as_bytes()))
    }
}

/// 迁移管理器
pub struct MigrationManager {
    pool: PgPool,
    table_name: String,
}

impl MigrationManager {
    /// 创建新的迁移管理器
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            table_name: "_migrations".to_string(),
        }
    }

    /// 设置迁移表名
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }

    /// 初始化迁移表
    pub async fn init(&self) -> AppResult<()> {
        let create_sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                version BIGINT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                checksum VARCHAR(64) NOT NULL
            )
            "#,
            self.table_name
        );

        sqlx::query(&create_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create migration table: {}", e)))?;

        Ok(())
    }

    /// 获取已应用的迁移
    pub async fn applied_migrations(&self) -> AppResult<Vec<MigrationRecord>> {
        let sql = format!(
            "SELECT version, name, applied_at, checksum FROM {} ORDER BY version ASC",
            self.table_name
        );

        sqlx::query_as::<_, MigrationRecord>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get migrations: {}", e)))
    }

    /// 在事务中应用单个迁移并写入记录
    pub async fn apply(&self, migration: &Migration) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;

        sqlx::raw_sql(&migration.up_sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to apply migration {} ({}): {}",
                    migration.version, migration.name, e
                ))
            })?;

        let insert_sql = format!(
            "INSERT INTO {} (version, name, checksum) VALUES ($1, $2, $3)",
            self.table_name
        );
        sqlx::query(&insert_sql)
            .bind(migration.version)
            .bind(&migration.name)
            .bind(&migration.checksum)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to record migration: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit migration: {}", e)))?;

        info!(
            version = migration.version,
            name = %migration.name,
            "Migration applied"
        );

        Ok(())
    }

    /// 应用所有待处理的迁移
    ///
    /// 第一个失败的迁移会中止后续迁移
    pub async fn migrate(&self, migrations: &[Migration]) -> AppResult<MigrationResult> {
        self.init().await?;

        let applied: HashMap<i64, String> = self
            .applied_migrations()
            .await?
            .into_iter()
            .map(|record| (record.version, record.checksum))
            .collect();

        let mut sorted: Vec<&Migration> = migrations.iter().collect();
        sorted.sort_by_key(|m| m.version);

        let mut result = MigrationResult::default();

        for migration in sorted {
            if let Some(checksum) = applied.get(&migration.version) {
                if checksum != &migration.checksum {
                    warn!(version = migration.version, "Migration checksum mismatch");
                    result.errors.push(MigrationError {
                        version: migration.version,
                        name: migration.name.clone(),
                        error: "Checksum mismatch - migration has been modified".to_string(),
                    });
                    break;
                }
                result.skipped.push(migration.version);
                continue;
            }

            if let Err(e) = self.apply(migration).await {
                result.errors.push(MigrationError {
                    version: migration.version,
                    name: migration.name.clone(),
                    error: e.to_string(),
                });
                break;
            }
            result.applied.push(migration.version);
        }

        Ok(result)
    }
}

/// 迁移结果
#[derive(Debug, Clone, Default)]
pub struct MigrationResult {
    /// 已应用的迁移版本
    pub applied: Vec<i64>,
    /// 跳过的迁移版本
    pub skipped: Vec<i64>,
    /// 错误
    pub errors: Vec<MigrationError>,
}

impl MigrationResult {
    /// 是否成功
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// 应用的迁移数量
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    /// 转换为 AppResult，存在错误时返回第一个错误
    pub fn into_result(self) -> AppResult<Self> {
        match self.errors.first() {
            Some(err) => Err(AppError::database(format!(
                "Migration {} ({}) failed: {}",
                err.version, err.name, err.error
            ))),
            None => Ok(self),
        }
    }
}

/// 迁移错误
#[derive(Debug, Clone)]
pub struct MigrationError {
    /// 版本
    pub version: i64,
    /// 名称
    pub name: String,
    /// 错误信息
    pub error: String,
}
