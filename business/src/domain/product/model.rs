use chrono::{DateTime, Utc};

use super::errors::ProductError;
use crate::domain::shared::value_objects::{CategoryId, UserId};

pub const MAX_NAME_LENGTH: usize = 150;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
/// Prices are whole cents, up to ten integer digits.
pub const MAX_PRICE: f64 = 9_999_999_999.99;
pub const PRICE_DECIMALS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// A validated product that has not been persisted yet.
/// The store assigns the id when it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let name = validate_name(&props.name)?;
        let description = validate_description(props.description)?;
        validate_price(props.price)?;

        Ok(Self {
            user_id: props.user_id,
            category_id: props.category_id,
            name,
            description,
            price: props.price,
            created_at: Utc::now(),
        })
    }
}

/// Field updates for an existing product. `None` leaves a field untouched.
/// A blank description clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<CategoryId>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category_id.is_none()
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i64,
        user_id: UserId,
        category_id: CategoryId,
        name: String,
        description: Option<String>,
        price: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            category_id,
            name,
            description,
            price,
            created_at,
            updated_at,
        }
    }

    /// Returns a copy of this product with the patch applied.
    ///
    /// The id, owner and creation time never change.
    pub fn apply(&self, patch: ProductPatch) -> Result<Product, ProductError> {
        let name = match patch.name {
            Some(name) => validate_name(&name)?,
            None => self.name.clone(),
        };
        let description = match patch.description {
            Some(description) => validate_description(Some(description))?,
            None => self.description.clone(),
        };
        let price = match patch.price {
            Some(price) => {
                validate_price(price)?;
                price
            }
            None => self.price,
        };

        Ok(Product {
            id: self.id,
            user_id: self.user_id,
            category_id: patch.category_id.unwrap_or(self.category_id),
            name,
            description,
            price,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }
}

fn validate_name(name: &str) -> Result<String, ProductError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProductError::NameEmpty);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ProductError::NameTooLong);
    }
    Ok(name.to_string())
}

fn validate_description(description: Option<String>) -> Result<Option<String>, ProductError> {
    let Some(description) = description else {
        return Ok(None);
    };
    let description = description.trim();
    if description.is_empty() {
        return Ok(None);
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ProductError::DescriptionTooLong);
    }
    Ok(Some(description.to_string()))
}

fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || !(0.0..=MAX_PRICE).contains(&price) || !has_whole_cents(price) {
        return Err(ProductError::InvalidPrice);
    }
    Ok(())
}

/// Checks the shortest decimal form of `price`, which is what callers wrote.
fn has_whole_cents(price: f64) -> bool {
    price
        .to_string()
        .split_once('.')
        .is_none_or(|(_, fraction)| fraction.len() <= PRICE_DECIMALS)
}
