use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::application::product::catalog::ProductCatalogService;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::paginate::PaginateProductsParams;
use business::domain::product::use_cases::search::SearchProductsParams;
use business::domain::shared::pagination::Page;
use business::domain::shared::value_objects::{CategoryId, UserId};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductPageResponse, ProductResponse, ProductSliceResponse,
    UpdateProductRequest, to_responses,
};
use crate::api::tags::ApiTags;

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_SIZE: i64 = 10;

/// Applies the default page coordinates to whatever the query left out.
pub fn paging(
    page: Option<i64>,
    size: Option<i64>,
    sort: Option<Vec<String>>,
) -> PaginateProductsParams {
    PaginateProductsParams {
        page: page.unwrap_or(DEFAULT_PAGE),
        size: size.unwrap_or(DEFAULT_SIZE),
        sort: sort.unwrap_or_default(),
    }
}

pub struct ProductApi {
    catalog: Arc<ProductCatalogService>,
}

impl ProductApi {
    pub fn new(catalog: Arc<ProductCatalogService>) -> Self {
        Self { catalog }
    }
}

/// Product catalog API
///
/// Endpoints for creating, browsing, searching, updating and deleting products.
#[OpenApi(prefix_path = "/api")]
impl ProductApi {
    /// Create a new product
    ///
    /// The referenced user and category must exist.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            user_id: UserId::new(body.0.user_id),
            category_id: CategoryId::new(body.0.category_id),
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
        };

        match self.catalog.create(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    404 => CreateProductResponse::NotFound(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products one page at a time
    ///
    /// `sort` may be repeated; each value is `field` or `field,asc|desc`.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products_page(
        &self,
        page: Query<Option<i64>>,
        size: Query<Option<i64>>,
        sort: Query<Option<Vec<String>>>,
    ) -> ProductPageResult {
        let params = paging(page.0, size.0, sort.0);
        ProductPageResult::from_result(self.catalog.find_all(params).await)
    }

    /// List products without counting the total
    #[oai(path = "/products/slice", method = "get", tag = "ApiTags::Products")]
    async fn get_products_slice(
        &self,
        page: Query<Option<i64>>,
        size: Query<Option<i64>>,
        sort: Query<Option<Vec<String>>>,
    ) -> ProductSliceResult {
        let params = paging(page.0, size.0, sort.0);
        match self.catalog.find_all_slice(params).await {
            Ok(slice) => ProductSliceResult::Ok(Json(slice.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ProductSliceResult::BadRequest(json),
                    _ => ProductSliceResult::InternalError(json),
                }
            }
        }
    }

    /// List every product, ordered by id
    #[oai(path = "/products/list", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> ProductListResult {
        ProductListResult::from_result(self.catalog.find_all_list().await)
    }

    /// Search products
    ///
    /// All filters are optional and combined. Price bounds are inclusive and
    /// the name matches any part of the product name, ignoring case.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(
        &self,
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
        ProductPageResult::from_result(self.catalog.find_with_filters(params).await)
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self.catalog.find_by_id(id.0).await {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Only the fields present in the body change.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        match self.catalog.update(id.0, body.0.into()).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> DeleteProductResponse {
        match self.catalog.delete(id.0).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductPageResult {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ProductPageResult {
    pub fn from_result(result: Result<Page<Product>, ProductError>) -> Self {
        match result {
            Ok(page) => ProductPageResult::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ProductPageResult::BadRequest(json),
                    _ => ProductPageResult::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductSliceResult {
    #[oai(status = 200)]
    Ok(Json<ProductSliceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductListResult {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ProductListResult {
    pub fn from_result(result: Result<Vec<Product>, ProductError>) -> Self {
        match result {
            Ok(products) => ProductListResult::Ok(Json(to_responses(products))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ProductListResult::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
