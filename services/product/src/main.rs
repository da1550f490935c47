//! Product Service - 商品服务
//!
//! 同一进程内运行 HTTP（默认 8081）与 gRPC（默认 50051）两个监听器

use std::sync::Arc;

use mercato_bootstrap::{
    AuthInterceptor, HealthChecker, connect_postgres, init_runtime, metrics_routes,
    run_migrations, serve_dual,
};
use mercato_config::AppConfig;
use mercato_telemetry::init_metrics;
use product_service::api::grpc::grpc_router;
use product_service::api::http_app;
use product_service::application::ProductService;
use product_service::infrastructure::persistence::{PostgresProductRepository, migrations};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load("config")?;
    init_runtime(&config);

    info!(app = %config.app_name, env = %config.app_env, "Starting product service");

    let metrics_handle = init_metrics()?;

    let pool = connect_postgres(&config.database).await?;
    run_migrations(&pool, &migrations()).await?;

    let repo = Arc::new(PostgresProductRepository::new(pool.clone()));
    let service = Arc::new(ProductService::new(repo));
    let checker = Arc::new(HealthChecker::new(pool));

    let http = http_app(service.clone(), checker).merge(metrics_routes(metrics_handle));
    let grpc = grpc_router(service, AuthInterceptor::new());

    let grpc_addr = config
        .server
        .grpc_addr()
        .ok_or("server.grpc_port is required for the product service")?;

    serve_dual(&config.server.http_addr(), http, &grpc_addr, grpc).await?;

    info!("Product service stopped");
    Ok(())
}
