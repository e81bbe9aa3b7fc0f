use crate::domain::errors::{Error, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Maps product failures onto the error catalog.
impl From<ProductError> for Error {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound | ProductError::Repository(RepositoryError::NotFound) => {
                Error::PRODUCT_NOT_FOUND
            }
            ProductError::NameEmpty | ProductError::Repository(RepositoryError::Duplicated) => {
                Error::PRODUCT_BAD_REQUEST
            }
        }
    }
}
