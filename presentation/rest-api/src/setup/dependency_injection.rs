use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::memory::InMemoryStore;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use sqlx::PgPool;

use business::application::product::catalog::ProductCatalogService;

use crate::api::category::routes::CategoryProductApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::user::routes::UserProductApi;
use crate::config::app_config::StorageBackend;
use crate::config::database_config;

/// Users and categories present when running on the in-memory store.
const SEED_USERS: i64 = 5;
const SEED_CATEGORIES: i64 = 10;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub user_product_api: UserProductApi,
    pub category_product_api: CategoryProductApi,
}

impl DependencyContainer {
    pub async fn new(storage: &StorageBackend) -> anyhow::Result<Self> {
        match storage {
            StorageBackend::Postgres(settings) => {
                let pool = database_config::init_database(settings).await?;
                Ok(Self::postgres(pool))
            }
            StorageBackend::Memory => {
                tracing::warn!("using in-memory storage, data is lost on shutdown");
                Ok(Self::in_memory(Arc::new(InMemoryStore::seeded(
                    SEED_USERS,
                    SEED_CATEGORIES,
                ))))
            }
        }
    }

    fn postgres(pool: PgPool) -> Self {
        let catalog = ProductCatalogService::from_repositories(
            Arc::new(ProductRepositoryPostgres::new(pool.clone())),
            Arc::new(CategoryRepositoryPostgres::new(pool.clone())),
            Arc::new(UserRepositoryPostgres::new(pool)),
            Arc::new(TracingLogger),
        );
        Self::from_catalog(catalog, "postgres")
    }

    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        let catalog = ProductCatalogService::from_repositories(
            store.clone(),
            store.clone(),
            store,
            Arc::new(TracingLogger),
        );
        Self::from_catalog(catalog, "memory")
    }

    fn from_catalog(catalog: ProductCatalogService, storage: &'static str) -> Self {
        let catalog = Arc::new(catalog);

        Self {
            health_api: HealthApi::new(storage),
            product_api: ProductApi::new(catalog.clone()),
            user_product_api: UserProductApi::new(catalog.clone()),
            category_product_api: CategoryProductApi::new(catalog),
        }
    }
}
