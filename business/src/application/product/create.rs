use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::user::repository::UserRepository;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let new_product = NewProduct::new(NewProductProps {
            user_id: params.user_id,
            category_id: params.category_id,
            name: params.name,
            description: params.description,
            price: params.price,
        })?;

        if !self
            .category_repository
            .exists(new_product.category_id)
            .await?
        {
            self.logger.warn(&format!(
                "Category not found: {}",
                new_product.category_id
            ));
            return Err(ProductError::CategoryNotFound);
        }

        if !self.user_repository.exists(new_product.user_id).await? {
            self.logger
                .warn(&format!("User not found: {}", new_product.user_id));
            return Err(ProductError::UserNotFound);
        }

        let product = self.repository.create(&new_product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
