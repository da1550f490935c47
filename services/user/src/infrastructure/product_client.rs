use mercato_bootstrap::connect_channel;
use mercato_config::ProductServiceConfig;
use mercato_errors::AppResult;
use tonic::transport::Channel;

use crate::proto::product_service_client::ProductServiceClient;

/// 启动时连接 Product 服务，失败直接返回错误
pub async fn connect_product_client(
    config: &ProductServiceConfig,
) -> AppResult<ProductServiceClient<Channel>> {
    let channel = connect_channel(&config.endpoint).await?;
    Ok(ProductServiceClient::new(channel))
}
