use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::{Product, ProductPatch};
use business::domain::shared::pagination::{Page, Slice};
use business::domain::shared::value_objects::CategoryId;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Owner of the product
    pub user_id: i64,
    /// Category the product belongs to
    pub category_id: i64,
    /// Product name (cannot be empty)
    pub name: String,
    /// Free text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price, zero or more
    pub price: f64,
}

/// Fields left out are not changed. An empty description clears it.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i64>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            category_id: request.category_id.map(CategoryId::new),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            user_id: product.user_id.value(),
            category_id: product.category_id.value(),
            name: product.name,
            description: product.description,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of products together with totals for the whole result.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductPageResponse {
    pub content: Vec<ProductResponse>,
    /// Zero-based page index
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let total_pages = page.total_pages();
        let first = page.is_first();
        let last = page.is_last();
        let page = page.map(ProductResponse::from);

        Self {
            content: page.content,
            number: page.number,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
            first,
            last,
        }
    }
}

/// One page of products without totals.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductSliceResponse {
    pub content: Vec<ProductResponse>,
    pub number: u32,
    pub size: u32,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
}

impl From<Slice<Product>> for ProductSliceResponse {
    fn from(slice: Slice<Product>) -> Self {
        let first = slice.is_first();
        let last = slice.is_last();
        let slice = slice.map(ProductResponse::from);

        Self {
            content: slice.content,
            number: slice.number,
            size: slice.size,
            first,
            last,
            has_next: slice.has_next,
        }
    }
}

pub fn to_responses(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}
