use crate::error::CatalogError;
use async_trait::async_trait;

#[async_trait]
pub trait IdGenerator: Send + Sync {
    async fn next_id(&self) -> Result<i64, CatalogError>;
}
