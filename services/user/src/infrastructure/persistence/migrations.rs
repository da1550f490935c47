use mercato_adapter_postgres::Migration;

/// 用户服务的 schema 迁移
pub fn migrations() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "create_users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            username VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL,
            CONSTRAINT users_username_key UNIQUE (username),
            CONSTRAINT users_email_key UNIQUE (email)
        );
        "#,
    )]
}
