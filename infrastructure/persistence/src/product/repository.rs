use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{
    ProductFilter, ProductPageRequest, effective_sort,
};
use business::domain::shared::pagination::{Page, Slice};
use business::domain::shared::value_objects::{CategoryId, UserId};

use super::columns::{ProductColumn, sql_direction};
use super::entity::{ProductEntity, price_to_decimal};

const PRODUCT_COLUMNS: &str =
    "id, user_id, category_id, name, description, price, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("products query failed: {e}");
    RepositoryError::DatabaseError
}

/// Escapes `LIKE` wildcards so user input only matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_filter(
    builder: &mut QueryBuilder<'_, Postgres>,
    filter: &ProductFilter,
) -> Result<(), RepositoryError> {
    builder.push(" WHERE TRUE");

    if let Some(name) = &filter.name {
        builder
            .push(" AND name ILIKE ")
            .push_bind(format!("%{}%", escape_like(name)));
    }
    if let Some(min_price) = filter.min_price {
        builder
            .push(" AND price >= ")
            .push_bind(price_to_decimal(min_price)?);
    }
    if let Some(max_price) = filter.max_price {
        builder
            .push(" AND price <= ")
            .push_bind(price_to_decimal(max_price)?);
    }
    if let Some(category_id) = filter.category_id {
        builder
            .push(" AND category_id = ")
            .push_bind(category_id.value());
    }
    if let Some(user_id) = filter.user_id {
        builder.push(" AND user_id = ").push_bind(user_id.value());
    }

    Ok(())
}

fn push_order(builder: &mut QueryBuilder<'_, Postgres>, request: &ProductPageRequest) {
    builder.push(" ORDER BY ");
    let mut separated = builder.separated(", ");
    for order in effective_sort(request) {
        let column = ProductColumn::from(order.field).order_expression();
        separated.push(format!("{} {}", column, sql_direction(order.direction)));
    }
}

fn to_i64(value: u64) -> Result<i64, RepositoryError> {
    i64::try_from(value).map_err(|_| RepositoryError::Persistence)
}

impl ProductRepositoryPostgres {
    async fn fetch_rows(
        &self,
        filter: &ProductFilter,
        request: &ProductPageRequest,
        limit: u64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM products",
            PRODUCT_COLUMNS
        ));
        push_filter(&mut builder, filter)?;
        push_order(&mut builder, request);
        builder
            .push(" LIMIT ")
            .push_bind(to_i64(limit)?)
            .push(" OFFSET ")
            .push_bind(to_i64(request.offset())?);

        let entities = builder
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        push_filter(&mut builder, filter)?;

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        u64::try_from(total).map_err(|_| RepositoryError::Persistence)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"INSERT INTO products (user_id, category_id, name, description, price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {}"#,
            PRODUCT_COLUMNS
        ))
        .bind(product.user_id.value())
        .bind(product.category_id.value())
        .bind(&product.name)
        .bind(&product.description)
        .bind(price_to_decimal(product.price)?)
        .bind(product.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_page(
        &self,
        filter: &ProductFilter,
        request: &ProductPageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let total = self.count(filter).await?;
        let content = if request.offset() < total {
            self.fetch_rows(filter, request, u64::from(request.size()))
                .await?
        } else {
            Vec::new()
        };

        Ok(Page::new(content, request, total))
    }

    async fn find_slice(
        &self,
        filter: &ProductFilter,
        request: &ProductPageRequest,
    ) -> Result<Slice<Product>, RepositoryError> {
        let rows = self
            .fetch_rows(filter, request, u64::from(request.size()) + 1)
            .await?;

        Ok(Slice::from_overfetch(rows, request))
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE user_id = $1 ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE category_id = $1 ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .bind(category_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                category_id = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING {}"#,
            PRODUCT_COLUMNS
        ))
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(price_to_decimal(product.price)?)
        .bind(product.category_id.value())
        .bind(product.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
