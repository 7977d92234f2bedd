use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, Slice};
use crate::domain::shared::value_objects::{CategoryId, UserId};

use super::model::{NewProduct, Product};
use super::value_objects::{ProductFilter, ProductPageRequest};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new product and returns it with its assigned id.
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    /// Every product, ordered by id.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_page(
        &self,
        filter: &ProductFilter,
        request: &ProductPageRequest,
    ) -> Result<Page<Product>, RepositoryError>;
    async fn find_slice(
        &self,
        filter: &ProductFilter,
        request: &ProductPageRequest,
    ) -> Result<Slice<Product>, RepositoryError>;
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, RepositoryError>;
    /// Overwrites the stored product with the same id.
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    /// Fails with `NotFound` when no product was removed.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
