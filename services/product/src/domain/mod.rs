//! 商品领域模型

mod product;
mod repository;

pub use product::{NewProduct, Product};
pub use repository::ProductRepository;

#[cfg(test)]
pub use repository::MockProductRepository;
