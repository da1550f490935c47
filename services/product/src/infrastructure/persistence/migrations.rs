use mercato_adapter_postgres::Migration;

/// 商品服务的 schema 迁移
pub fn migrations() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "create_products",
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            price DOUBLE PRECISION NOT NULL,
            stock INTEGER NOT NULL CHECK (stock >= 0),
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        );
        "#,
    )]
}
