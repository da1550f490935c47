//! 数据库初始化
//!
//! 连接失败或迁移失败都直接返回错误，服务不会在半初始化状态下启动

use mercato_adapter_postgres::{Migration, MigrationManager, PostgresConfig, create_pool};
use mercato_config::DatabaseConfig;
use mercato_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

/// 创建 PostgreSQL 连接池
pub async fn connect_postgres(config: &DatabaseConfig) -> AppResult<PgPool> {
    let pg_config = PostgresConfig::new(config.url.expose_secret())
        .with_max_connections(config.max_connections);
    let pool = create_pool(&pg_config).await?;

    info!(
        "PostgreSQL connection pool created (max_connections: {})",
        config.max_connections
    );
    Ok(pool)
}

/// 应用服务的 schema 迁移
pub async fn run_migrations(pool: &PgPool, migrations: &[Migration]) -> AppResult<()> {
    let result = MigrationManager::new(pool.clone())
        .migrate(migrations)
        .await?
        .into_result()?;

    info!(
        applied = result.applied_count(),
        skipped = result.skipped.len(),
        "Database migrations complete"
    );
    Ok(())
}
