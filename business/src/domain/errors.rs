use std::fmt;

use serde::Serialize;

/// Structured business error carried by a failed outcome.
///
/// Values are only reachable through the predeclared entries below (or
/// [`ErrorCatalog`]); there is no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Error {
    #[serde(rename = "Code")]
    code: i32,
    #[serde(rename = "Description")]
    description: &'static str,
}

impl Error {
    pub const PRODUCT_NOT_FOUND: Self = Self::new(100, "Product not found");
    pub const PRODUCT_BAD_REQUEST: Self = Self::new(101, "Product bad request");

    const fn new(code: i32, description: &'static str) -> Self {
        Self { code, description }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

impl std::error::Error for Error {}

/// Named entries of the fixed error catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCatalog {
    ProductNotFound,
    ProductBadRequest,
}

impl ErrorCatalog {
    pub const ALL: [Self; 2] = [Self::ProductNotFound, Self::ProductBadRequest];

    pub const fn error(self) -> Error {
        match self {
            ErrorCatalog::ProductNotFound => Error::PRODUCT_NOT_FOUND,
            ErrorCatalog::ProductBadRequest => Error::PRODUCT_BAD_REQUEST,
        }
    }
}

impl From<ErrorCatalog> for Error {
    fn from(entry: ErrorCatalog) -> Self {
        entry.error()
    }
}

/// Raised when an outcome is built without its payload.
/// This is a defect at the call site and never becomes a business [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("outcome.missing_value")]
    MissingValue,
    #[error("outcome.missing_error")]
    MissingError,
}

/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
}
