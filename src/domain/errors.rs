use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Record not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("A product with article '{0}' already exists")]
    DuplicateArticle(String),
    #[error("Product '{0}' is referenced by an order and cannot be deleted")]
    ProductInUse(String),
    #[error("Invalid email or password for the selected role")]
    InvalidCredentials,
    #[error("Not permitted: {0}")]
    Forbidden(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
