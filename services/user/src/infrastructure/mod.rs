//! 基础设施层

mod product_client;
pub mod persistence;

pub use product_client::connect_product_client;
