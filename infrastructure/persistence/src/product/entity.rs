use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::{CategoryId, UserId};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            UserId::new(self.user_id),
            CategoryId::new(self.category_id),
            self.name,
            self.description,
            self.price.to_f64().unwrap_or_default(),
            self.created_at,
            self.updated_at,
        )
    }
}

/// Converts a price or price bound to the decimal it was written as.
///
/// Uses the shortest decimal form of the `f64`, never rounding, so a bound
/// like `19.999` compares in SQL exactly as it does in the domain.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    if !price.is_finite() {
        return Err(RepositoryError::Persistence);
    }
    BigDecimal::from_str(&price.to_string()).map_err(|_| RepositoryError::Persistence)
}
