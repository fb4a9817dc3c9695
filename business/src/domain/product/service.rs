use async_trait::async_trait;

use crate::domain::errors::ServiceError;

use super::model::{Product, ProductDraft};
use super::value_objects::ProductId;

/// Port to the remote product collection.
///
/// The service is the single source of truth; implementations never cache.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ServiceError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, ServiceError>;
    async fn create(&self, draft: &ProductDraft) -> Result<(), ServiceError>;
    /// Partial update. A draft without image leaves the stored image to the
    /// service's discretion.
    async fn update(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), ServiceError>;
    async fn delete(&self, id: &ProductId) -> Result<(), ServiceError>;
}
