use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::paginate::{
    PaginateProductsParams, PaginateProductsUseCase,
};
use crate::domain::product::value_objects::{ProductFilter, ProductPageRequest};
use crate::domain::shared::pagination::{Page, Slice};

pub struct PaginateProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PaginateProductsUseCase for PaginateProductsUseCaseImpl {
    async fn execute_page(
        &self,
        params: PaginateProductsParams,
    ) -> Result<Page<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching product page {} (size {})",
            params.page, params.size
        ));

        let request = ProductPageRequest::parse(params.page, params.size, &params.sort)?;
        let page = self
            .repository
            .find_page(&ProductFilter::default(), &request)
            .await?;

        self.logger.debug(&format!(
            "Product page {} holds {} of {} products",
            page.number,
            page.content.len(),
            page.total_elements
        ));
        Ok(page)
    }

    async fn execute_slice(
        &self,
        params: PaginateProductsParams,
    ) -> Result<Slice<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching product slice {} (size {})",
            params.page, params.size
        ));

        let request = ProductPageRequest::parse(params.page, params.size, &params.sort)?;
        let slice = self
            .repository
            .find_slice(&ProductFilter::default(), &request)
            .await?;
        Ok(slice)
    }
}
