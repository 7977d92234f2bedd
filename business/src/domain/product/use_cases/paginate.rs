use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::{Page, Slice};

/// Raw page coordinates as received from a caller. Validated by the use case.
#[derive(Debug, Clone)]
pub struct PaginateProductsParams {
    pub page: i64,
    pub size: i64,
    /// Sort expressions of the form `field` or `field,direction`.
    pub sort: Vec<String>,
}

#[async_trait]
pub trait PaginateProductsUseCase: Send + Sync {
    async fn execute_page(
        &self,
        params: PaginateProductsParams,
    ) -> Result<Page<Product>, ProductError>;

    /// Like `execute_page` but skips counting the total.
    async fn execute_slice(
        &self,
        params: PaginateProductsParams,
    ) -> Result<Slice<Product>, ProductError>;
}
