use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::product::value_objects::{ProductFilter, ProductPageRequest};
use crate::domain::shared::pagination::Page;
use crate::domain::shared::value_objects::UserId;

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl SearchProductsUseCaseImpl {
    async fn search(
        &self,
        filter: ProductFilter,
        params: SearchProductsParams,
    ) -> Result<Page<Product>, ProductError> {
        let pagination = params.pagination;
        let request =
            ProductPageRequest::parse(pagination.page, pagination.size, &pagination.sort)?;

        self.logger.debug(&format!("Searching products with {:?}", filter));
        let page = self.repository.find_page(&filter, &request).await?;

        self.logger.info(&format!(
            "Product search matched {} products",
            page.total_elements
        ));
        Ok(page)
    }
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Page<Product>, ProductError> {
        let filter = ProductFilter::new(
            params.name.clone(),
            params.min_price,
            params.max_price,
            params.category_id,
        )?;
        self.search(filter, params).await
    }

    async fn execute_for_user(
        &self,
        user_id: UserId,
        params: SearchProductsParams,
    ) -> Result<Page<Product>, ProductError> {
        let filter = ProductFilter::new(
            params.name.clone(),
            params.min_price,
            params.max_price,
            params.category_id,
        )?
        .owned_by(user_id);
        self.search(filter, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockProductRepo, make_product, mock_logger};
    use crate::domain::product::use_cases::paginate::PaginateProductsParams;
    use crate::domain::shared::value_objects::CategoryId;

    fn params(
        name: Option<&str>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> SearchProductsParams {
        SearchProductsParams {
            name: name.map(str::to_string),
            min_price,
            max_price,
            category_id: Some(CategoryId::new(3)),
            pagination: PaginateProductsParams {
                page: 0,
                size: 10,
                sort: vec![],
            },
        }
    }

    #[tokio::test]
    async fn should_build_filter_from_params() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .withf(|filter, _| {
                filter.name.as_deref() == Some("laptop")
                    && filter.min_price == Some(10.0)
                    && filter.max_price == Some(20.0)
                    && filter.category_id == Some(CategoryId::new(3))
                    && filter.user_id.is_none()
            })
            .returning(|_, request| Ok(Page::new(vec![make_product(1, "Laptop", 15.0)], request, 1)));

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(params(Some(" laptop "), Some(10.0), Some(20.0)))
            .await
            .unwrap();

        assert_eq!(page.content.len(), 1);
    }

    #[tokio::test]
    async fn should_scope_search_to_owner() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_page()
            .withf(|filter, _| filter.user_id == Some(UserId::new(4)))
            .returning(|_, request| Ok(Page::new(vec![], request, 0)));

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute_for_user(UserId::new(4), params(None, None, None))
            .await
            .unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_pages(), 0);
    }

    #[tokio::test]
    async fn should_reject_inverted_price_range() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_page().never();

        let use_case = SearchProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(None, Some(50.0), Some(5.0)))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::InvalidPriceRange
        ));
    }
}
