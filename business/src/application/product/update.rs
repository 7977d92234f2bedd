use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

fn not_found_or(e: RepositoryError) -> ProductError {
    match e {
        RepositoryError::NotFound => ProductError::NotFound,
        other => ProductError::Repository(other),
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(not_found_or)?;

        if params.patch.is_empty() {
            self.logger
                .debug(&format!("Empty patch for product {}", params.id));
            return Ok(existing);
        }

        let new_category = params
            .patch
            .category_id
            .filter(|category_id| *category_id != existing.category_id);
        let updated = existing.apply(params.patch)?;

        if let Some(category_id) = new_category
            && !self.category_repository.exists(category_id).await?
        {
            self.logger
                .warn(&format!("Category not found: {}", category_id));
            return Err(ProductError::CategoryNotFound);
        }

        let saved = self
            .repository
            .update(&updated)
            .await
            .map_err(not_found_or)?;

        self.logger.info(&format!("Product updated: {}", saved.id));
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockCategoryRepo, MockProductRepo, make_product, mock_logger,
    };
    use crate::domain::product::model::ProductPatch;
    use crate::domain::shared::value_objects::CategoryId;

    #[tokio::test]
    async fn should_update_only_patched_fields() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Old Name", 10.0)));
        mock_repo
            .expect_update()
            .withf(|product| product.name == "New Name" && product.price == 10.0)
            .returning(|product| Ok(product.clone()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: 8,
                patch: ProductPatch {
                    name: Some("New Name".to_string()),
                    ..ProductPatch::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(product.id, 8);
        assert_eq!(product.name, "New Name");
        assert_eq!(product.price, 10.0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 1,
                patch: ProductPatch {
                    price: Some(3.0),
                    ..ProductPatch::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_negative_price() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Tablet", 300.0)));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 2,
                patch: ProductPatch {
                    price: Some(-1.0),
                    ..ProductPatch::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }

    #[tokio::test]
    async fn should_reject_unknown_new_category() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Tablet", 300.0)));
        mock_repo.expect_update().never();
        let mut categories = MockCategoryRepo::new();
        categories.expect_exists().returning(|_| Ok(false));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(categories),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 2,
                patch: ProductPatch {
                    category_id: Some(CategoryId::new(77)),
                    ..ProductPatch::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::CategoryNotFound));
    }

    #[tokio::test]
    async fn should_skip_store_write_for_empty_patch() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Tablet", 300.0)));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: 2,
                patch: ProductPatch::default(),
            })
            .await
            .unwrap();

        assert_eq!(product.name, "Tablet");
    }
}
