use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
};

use business::application::product::catalog::ProductCatalogService;
use business::domain::product::use_cases::search::SearchProductsParams;
use business::domain::shared::value_objects::{CategoryId, UserId};

use crate::api::product::routes::{ProductListResult, ProductPageResult, paging};
use crate::api::tags::ApiTags;

pub struct UserProductApi {
    catalog: Arc<ProductCatalogService>,
}

impl UserProductApi {
    pub fn new(catalog: Arc<ProductCatalogService>) -> Self {
        Self { catalog }
    }
}

/// Products owned by a user
#[OpenApi(prefix_path = "/api")]
impl UserProductApi {
    /// List a user's products, ordered by id
    #[oai(path = "/users/:id/products", method = "get", tag = "ApiTags::Users")]
    async fn get_user_products(&self, id: Path<i64>) -> ProductListResult {
        ProductListResult::from_result(self.catalog.find_by_user_id(UserId::new(id.0)).await)
    }

    /// Search within a user's products
    #[oai(path = "/users/:id/products/search", method = "get", tag = "ApiTags::Users")]
    async fn search_user_products(
        &self,
        id: Path<i64>,
        name: Query<Option<String>>,
        #[oai(name = "minPrice")] min_price: Query<Option<f64>>,
        #[oai(name = "maxPrice")] max_price: Query<Option<f64>>,
        #[oai(name = "categoryId")] category_id: Query<Option<i64>>,
        page: Query<Option<i64>>,
        size: Query<Option<i64>>,
        sort: Query<Option<Vec<String>>>,
    ) -> ProductPageResult {
        let params = SearchProductsParams {
            name: name.0,
            min_price: min_price.0,
            max_price: max_price.0,
            category_id: category_id.0.map(CategoryId::new),
            pagination: paging(page.0, size.0, sort.0),
        };
        ProductPageResult::from_result(
            self.catalog
                .find_by_user_id_with_filters(UserId::new(id.0), params)
                .await,
        )
    }
}
