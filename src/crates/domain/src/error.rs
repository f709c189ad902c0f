use thiserror::Error;

/// Shared error taxonomy for catalog operations. All five resources go
/// through the same generic repository, so a single enum replaces the
/// per-aggregate error types.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("database error: {0}")]
    Db(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("duplicate value: {0}")]
    Conflict(String),
    #[error("validation failed on {0}")]
    Validation(String),
    #[error("{0}")]
    Other(String),
}
