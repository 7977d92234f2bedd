use std::sync::Arc;

use crate::application::product::create::CreateProductUseCaseImpl;
use crate::application::product::delete::DeleteProductUseCaseImpl;
use crate::application::product::get_by_id::GetProductByIdUseCaseImpl;
use crate::application::product::list::ListProductsUseCaseImpl;
use crate::application::product::paginate::PaginateProductsUseCaseImpl;
use crate::application::product::search::SearchProductsUseCaseImpl;
use crate::application::product::update::UpdateProductUseCaseImpl;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductPatch};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::use_cases::list::{
    ListProductsByCategoryParams, ListProductsByUserParams, ListProductsUseCase,
};
use crate::domain::product::use_cases::paginate::{
    PaginateProductsParams, PaginateProductsUseCase,
};
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::pagination::{Page, Slice};
use crate::domain::shared::value_objects::{CategoryId, UserId};
use crate::domain::user::repository::UserRepository;

/// Façade grouping every product use case behind one handle.
///
/// Each call is a single independent exchange with the store; the façade
/// holds no state of its own.
pub struct ProductCatalogService {
    pub create_use_case: Arc<dyn CreateProductUseCase>,
    pub get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    pub list_use_case: Arc<dyn ListProductsUseCase>,
    pub paginate_use_case: Arc<dyn PaginateProductsUseCase>,
    pub search_use_case: Arc<dyn SearchProductsUseCase>,
    pub update_use_case: Arc<dyn UpdateProductUseCase>,
    pub delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductCatalogService {
    /// Wires the default use case implementations over the given ports.
    pub fn from_repositories(
        repository: Arc<dyn ProductRepository>,
        category_repository: Arc<dyn CategoryRepository>,
        user_repository: Arc<dyn UserRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            create_use_case: Arc::new(CreateProductUseCaseImpl {
                repository: repository.clone(),
                category_repository: category_repository.clone(),
                user_repository,
                logger: logger.clone(),
            }),
            get_by_id_use_case: Arc::new(GetProductByIdUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            list_use_case: Arc::new(ListProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            paginate_use_case: Arc::new(PaginateProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            search_use_case: Arc::new(SearchProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            update_use_case: Arc::new(UpdateProductUseCaseImpl {
                repository: repository.clone(),
                category_repository,
                logger: logger.clone(),
            }),
            delete_use_case: Arc::new(DeleteProductUseCaseImpl { repository, logger }),
        }
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.create_use_case.execute(params).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Product, ProductError> {
        self.get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
    }

    /// Whole collection, unbounded. Prefer `find_all` for large catalogs.
    pub async fn find_all_list(&self) -> Result<Vec<Product>, ProductError> {
        self.list_use_case.execute_all().await
    }

    pub async fn find_all(
        &self,
        params: PaginateProductsParams,
    ) -> Result<Page<Product>, ProductError> {
        self.paginate_use_case.execute_page(params).await
    }

    pub async fn find_all_slice(
        &self,
        params: PaginateProductsParams,
    ) -> Result<Slice<Product>, ProductError> {
        self.paginate_use_case.execute_slice(params).await
    }

    pub async fn find_with_filters(
        &self,
        params: SearchProductsParams,
    ) -> Result<Page<Product>, ProductError> {
        self.search_use_case.execute(params).await
    }

    pub async fn find_by_user_id_with_filters(
        &self,
        user_id: UserId,
        params: SearchProductsParams,
    ) -> Result<Page<Product>, ProductError> {
        self.search_use_case.execute_for_user(user_id, params).await
    }

    pub async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Product>, ProductError> {
        self.list_use_case
            .execute_by_user(ListProductsByUserParams { user_id })
            .await
    }

    pub async fn find_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, ProductError> {
        self.list_use_case
            .execute_by_category(ListProductsByCategoryParams { category_id })
            .await
    }

    pub async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product, ProductError> {
        self.update_use_case
            .execute(UpdateProductParams { id, patch })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ProductError> {
        self.delete_use_case
            .execute(DeleteProductParams { id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockCategoryRepo, MockProductRepo, MockUserRepo, make_product, mock_logger,
    };
    use crate::domain::errors::RepositoryError;

    fn catalog(repo: MockProductRepo) -> ProductCatalogService {
        ProductCatalogService::from_repositories(
            Arc::new(repo),
            Arc::new(MockCategoryRepo::new()),
            Arc::new(MockUserRepo::new()),
            mock_logger(),
        )
    }

    #[tokio::test]
    async fn should_route_find_by_id_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Tablet Slim", 210.0)));

        let product = catalog(mock_repo).find_by_id(12).await.unwrap();

        assert_eq!(product.id, 12);
    }

    #[tokio::test]
    async fn should_fail_second_delete_with_not_found() {
        let mut mock_repo = MockProductRepo::new();
        let mut seq = mockall::Sequence::new();
        mock_repo
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock_repo
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(RepositoryError::NotFound));
        let catalog = catalog(mock_repo);

        assert!(catalog.delete(3).await.is_ok());
        assert!(matches!(
            catalog.delete(3).await.unwrap_err(),
            ProductError::NotFound
        ));
    }

    #[tokio::test]
    async fn should_route_category_listing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_category_id()
            .returning(|_| Ok(vec![make_product(1, "Mouse", 20.0)]));

        let products = catalog(mock_repo)
            .find_by_category_id(CategoryId::new(1))
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
    }
}
