use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{
    ListProductsByCategoryParams, ListProductsByUserParams, ListProductsUseCase,
};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute_all(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Listing all products");
        let products = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Listed {} products", products.len()));
        Ok(products)
    }

    async fn execute_by_user(
        &self,
        params: ListProductsByUserParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Listing products of user: {}", params.user_id));
        let products = self.repository.find_by_user_id(params.user_id).await?;
        Ok(products)
    }

    async fn execute_by_category(
        &self,
        params: ListProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Listing products of category: {}",
            params.category_id
        ));
        let products = self
            .repository
            .find_by_category_id(params.category_id)
            .await?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, make_product, mock_logger};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{CategoryId, UserId};

    #[tokio::test]
    async fn should_return_all_products() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                make_product(1, "Laptop", 1500.0),
                make_product(2, "Mouse", 25.0),
            ])
        });

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute_all().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
    }

    #[tokio::test]
    async fn should_query_products_by_owner() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_user_id()
            .withf(|user_id| *user_id == UserId::new(9))
            .returning(|_| Ok(vec![make_product(3, "Monitor", 300.0)]));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute_by_user(ListProductsByUserParams {
                user_id: UserId::new(9),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn should_query_products_by_category() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_category_id()
            .withf(|category_id| *category_id == CategoryId::new(2))
            .returning(|_| Ok(vec![]));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute_by_category(ListProductsByCategoryParams {
                category_id: CategoryId::new(2),
            })
            .await
            .unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_store_outage() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute_all().await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
