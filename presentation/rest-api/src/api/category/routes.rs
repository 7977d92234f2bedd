use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path};

use business::application::product::catalog::ProductCatalogService;
use business::domain::shared::value_objects::CategoryId;

use crate::api::product::routes::ProductListResult;
use crate::api::tags::ApiTags;

pub struct CategoryProductApi {
    catalog: Arc<ProductCatalogService>,
}

impl CategoryProductApi {
    pub fn new(catalog: Arc<ProductCatalogService>) -> Self {
        Self { catalog }
    }
}

#[OpenApi(prefix_path = "/api")]
impl CategoryProductApi {
    /// List the products of a category, ordered by id
    #[oai(path = "/categories/:id/products", method = "get", tag = "ApiTags::Categories")]
    async fn get_category_products(&self, id: Path<i64>) -> ProductListResult {
        ProductListResult::from_result(
            self.catalog
                .find_by_category_id(CategoryId::new(id.0))
                .await,
        )
    }
}
