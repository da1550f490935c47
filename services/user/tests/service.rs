mod common;

use std::sync::Arc;

use common::{InMemoryUserRepository, user_service};
use mercato_errors::AppError;

#[tokio::test]
async fn test_registered_user_can_be_fetched_by_id() {
    let service = user_service(Arc::new(InMemoryUserRepository::default()));

    let user = service
        .register("alice", "alice@example.com", "secret123")
        .await
        .unwrap();

    let fetched = service.get_user(user.id).await.unwrap();
    assert_eq!(fetched.username, "alice");
    assert_ne!(fetched.password_hash, "secret123");

    let err = service.get_user(user.id + 100).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_product_client_is_injected_without_dialing() {
    let service = user_service(Arc::new(InMemoryUserRepository::default()));

    // 延迟连接的通道可以随意克隆，不会触发拨号
    let _client = service.product_client();
    assert!(service.logout().await.is_ok());
}
