use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn exists(&self, id: UserId) -> Result<bool, RepositoryError>;
}
