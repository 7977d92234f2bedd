use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{CategoryId, UserId};

pub struct CreateProductParams {
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
