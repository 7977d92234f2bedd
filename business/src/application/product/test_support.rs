use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::{ProductFilter, ProductPageRequest};
use crate::domain::shared::pagination::{Page, Slice};
use crate::domain::shared::value_objects::{CategoryId, UserId};
use crate::domain::user::repository::UserRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn find_page(&self, filter: &ProductFilter, request: &ProductPageRequest) -> Result<Page<Product>, RepositoryError>;
        async fn find_slice(&self, filter: &ProductFilter, request: &ProductPageRequest) -> Result<Slice<Product>, RepositoryError>;
        async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_category_id(&self, category_id: CategoryId) -> Result<Vec<Product>, RepositoryError>;
        async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn exists(&self, id: CategoryId) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn exists(&self, id: UserId) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn make_product(id: i64, name: &str, price: f64) -> Product {
    let now = Utc::now();
    Product::from_repository(
        id,
        UserId::new(1),
        CategoryId::new(1),
        name.to_string(),
        None,
        price,
        now,
        now,
    )
}
