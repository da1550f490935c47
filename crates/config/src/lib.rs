//! mercato-config - 配置加载库
//!
//! 加载顺序（后者覆盖前者）：
//! 1. `{config_dir}/default.toml`
//! 2. `{config_dir}/{APP_ENV}.toml`
//! 3. 以 `MERCATO_` 为前缀的环境变量，嵌套字段用 `__` 分隔，
//!    例如 `MERCATO_SERVER__HTTP_PORT=9000`

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;
use thiserror::Error;

use secrecy::Secret;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "MERCATO_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    // 开发环境: 10, 生产环境: 50
    match std::env::var("APP_ENV").as_deref() {
        Ok("production") => 50,
        _ => 10,
    }
}

/// 服务器配置
///
/// `grpc_port` 只有同时对外提供 gRPC 的服务才需要配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub http_port: u16,
    pub grpc_port: Option<u16>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl ServerConfig {
    /// HTTP 监听地址
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// gRPC 监听地址（未配置 gRPC 端口时为 None）
    pub fn grpc_addr(&self) -> Option<String> {
        self.grpc_port.map(|port| format!("{}:{}", self.host, port))
    }
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 下游 Product 服务的 gRPC 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ProductServiceConfig {
    #[serde(default = "default_product_endpoint")]
    pub endpoint: String,
}

impl Default for ProductServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_product_endpoint(),
        }
    }
}

fn default_product_endpoint() -> String {
    "http://127.0.0.1:50051".to_string()
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    pub product_service: Option<ProductServiceConfig>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        // 本地开发时允许使用 .env
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());

        Self::figment(config_dir, &env).extract().map_err(ConfigError::from)
    }

    fn figment(config_dir: &str, env: &str) -> Figment {
        Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}

#[cfg(test)]
mod tests;
