//! 用户持久化

mod migrations;
mod postgres;
mod rows;

pub use migrations::migrations;
pub use postgres::PostgresUserRepository;
