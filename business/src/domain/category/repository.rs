use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::CategoryId;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn exists(&self, id: CategoryId) -> Result<bool, RepositoryError>;
}
