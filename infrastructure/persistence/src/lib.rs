pub mod db;
pub mod category {
    pub mod repository;
}
pub mod memory;
pub mod product {
    pub mod columns;
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod repository;
}
