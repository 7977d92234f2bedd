use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{CategoryId, UserId};

pub struct ListProductsByUserParams {
    pub user_id: UserId,
}

pub struct ListProductsByCategoryParams {
    pub category_id: CategoryId,
}

/// Unpaginated listings. Meant for small collections only.
#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute_all(&self) -> Result<Vec<Product>, ProductError>;

    async fn execute_by_user(
        &self,
        params: ListProductsByUserParams,
    ) -> Result<Vec<Product>, ProductError>;

    async fn execute_by_category(
        &self,
        params: ListProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError>;
}
