use chrono::{DateTime, Utc};
use mercato_errors::{AppError, AppResult};

/// 商品
///
/// `id` 由存储分配，正整数且单调递增
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待创建的商品
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }

    /// 校验输入
    ///
    /// 名称、描述允许为空；价格必须是有限数，库存不能为负
    pub fn validate(&self) -> AppResult<()> {
        if !self.price.is_finite() {
            return Err(AppError::validation("price must be a finite number"));
        }
        if self.stock < 0 {
            return Err(AppError::validation("stock must not be negative"));
        }
        Ok(())
    }

    /// 以给定时间戳生成商品，创建时 `created_at == updated_at`
    pub fn into_product(self, id: i64, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_strings_are_accepted() {
        assert!(NewProduct::new("", "", 0.0, 0).validate().is_ok());
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let err = NewProduct::new("Pen", "Blue", 1.5, -1).validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        assert!(NewProduct::new("Pen", "", f64::NAN, 1).validate().is_err());
        assert!(NewProduct::new("Pen", "", f64::INFINITY, 1).validate().is_err());
    }

    #[test]
    fn test_into_product_uses_single_timestamp() {
        let now = Utc::now();
        let product = NewProduct::new("Pen", "Blue", 1.5, 10).into_product(7, now);
        assert_eq!(product.id, 7);
        assert_eq!(product.created_at, product.updated_at);
    }
}
