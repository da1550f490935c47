//! User Service - 用户服务
//!
//! 启动时先连接 Product 服务的 gRPC 端口，连接失败则进程退出

use std::sync::Arc;

use mercato_bootstrap::{
    HealthChecker, connect_postgres, init_runtime, run_migrations, serve_http, shutdown_signal,
};
use mercato_config::AppConfig;
use tracing::info;
use user_service::api::http_app;
use user_service::application::UserService;
use user_service::domain::Argon2Hasher;
use user_service::infrastructure::connect_product_client;
use user_service::infrastructure::persistence::{PostgresUserRepository, migrations};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load("config")?;
    init_runtime(&config);

    info!(app = %config.app_name, env = %config.app_env, "Starting user service");

    let pool = connect_postgres(&config.database).await?;
    run_migrations(&pool, &migrations()).await?;

    let product_config = config.product_service.clone().unwrap_or_default();
    let product_client = connect_product_client(&product_config).await?;

    let repo = Arc::new(PostgresUserRepository::new(pool.clone()));
    let service = Arc::new(UserService::new(
        repo,
        Arc::new(Argon2Hasher),
        product_client,
    ));
    let checker = Arc::new(HealthChecker::new(pool));

    serve_http(
        &config.server.http_addr(),
        http_app(service, checker),
        shutdown_signal(),
    )
    .await?;

    info!("User service stopped");
    Ok(())
}
