use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::paginate::PaginateProductsParams;
use crate::domain::shared::pagination::Page;
use crate::domain::shared::value_objects::{CategoryId, UserId};

#[derive(Debug, Clone)]
pub struct SearchProductsParams {
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub category_id: Option<CategoryId>,
    pub pagination: PaginateProductsParams,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<Page<Product>, ProductError>;

    /// Same as `execute`, restricted to products owned by `user_id`.
    async fn execute_for_user(
        &self,
        user_id: UserId,
        params: SearchProductsParams,
    ) -> Result<Page<Product>, ProductError>;
}
