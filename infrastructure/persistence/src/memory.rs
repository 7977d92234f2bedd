//! In-process store used for tests and for running the service without a
//! database. Filtering and ordering go through `ProductFilter::matches` and
//! `compare_products`; the PostgreSQL adapter mirrors both, including
//! case-insensitive name ordering.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{
    ProductFilter, ProductPageRequest, compare_products, effective_sort,
};
use business::domain::shared::pagination::{Page, Slice};
use business::domain::shared::value_objects::{CategoryId, UserId};
use business::domain::user::repository::UserRepository;

#[derive(Default)]
struct State {
    last_id: i64,
    products: BTreeMap<i64, Product>,
    categories: BTreeSet<CategoryId>,
    users: BTreeSet<UserId>,
}

impl State {
    /// Matching products in requested order, ids ascending as last tie-break.
    fn select(&self, filter: &ProductFilter, request: &ProductPageRequest) -> Vec<&Product> {
        let orders = effective_sort(request);
        let mut matching: Vec<&Product> = self
            .products
            .values()
            .filter(|product| filter.matches(product))
            .collect();
        matching.sort_by(|a, b| compare_products(&orders, a, b));
        matching
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store where users `1..=users` and categories
    /// `1..=categories` already exist.
    pub fn seeded(users: i64, categories: i64) -> Self {
        let state = State {
            users: (1..=users).map(UserId::new).collect(),
            categories: (1..=categories).map(CategoryId::new).collect(),
            ..State::default()
        };
        Self {
            state: RwLock::new(state),
        }
    }

    pub async fn add_user(&self, id: UserId) {
        self.state.write().await.users.insert(id);
    }

    pub async fn add_category(&self, id: CategoryId) {
        self.state.write().await.categories.insert(id);
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let created = Product::from_repository(
            state.last_id,
            product.user_id,
            product.category_id,
            product.name.clone(),
            product.description.clone(),
            product.price,
            product.created_at,
            product.created_at,
        );
        state.products.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        self.state
            .read()
            .await
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.state.read().await.products.values().cloned().collect())
    }

    async fn find_page(
        &self,
        filter: &ProductFilter,
        request: &ProductPageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let state = self.state.read().await;
        let matching = state.select(filter, request);
        let total = matching.len() as u64;
        let content = matching
            .into_iter()
            .skip(to_usize(request.offset()))
            .take(request.size() as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, request, total))
    }

    async fn find_slice(
        &self,
        filter: &ProductFilter,
        request: &ProductPageRequest,
    ) -> Result<Slice<Product>, RepositoryError> {
        let state = self.state.read().await;
        let rows = state
            .select(filter, request)
            .into_iter()
            .skip(to_usize(request.offset()))
            .take(request.size() as usize + 1)
            .cloned()
            .collect();

        Ok(Slice::from_overfetch(rows, request))
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .products
            .values()
            .filter(|product| product.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .products
            .values()
            .filter(|product| product.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn update(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;
        let stored = state
            .products
            .get_mut(&product.id)
            .ok_or(RepositoryError::NotFound)?;
        *stored = product.clone();
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.state
            .write()
            .await
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn exists(&self, id: CategoryId) -> Result<bool, RepositoryError> {
        Ok(self.state.read().await.categories.contains(&id))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn exists(&self, id: UserId) -> Result<bool, RepositoryError> {
        Ok(self.state.read().await.users.contains(&id))
    }
}
