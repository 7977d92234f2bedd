use crate::domain::shared::pagination::PaginationError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.name_too_long")]
    NameTooLong,
    #[error("product.description_too_long")]
    DescriptionTooLong,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_price_range")]
    InvalidPriceRange,
    #[error("product.not_found")]
    NotFound,
    #[error("category.not_found")]
    CategoryNotFound,
    #[error("user.not_found")]
    UserNotFound,
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// True for failures caused by malformed or out-of-range input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::NameEmpty
                | ProductError::NameTooLong
                | ProductError::DescriptionTooLong
                | ProductError::InvalidPrice
                | ProductError::InvalidPriceRange
                | ProductError::Pagination(_)
        )
    }

    /// True when the product or one of its references does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ProductError::NotFound | ProductError::CategoryNotFound | ProductError::UserNotFound
        )
    }
}
