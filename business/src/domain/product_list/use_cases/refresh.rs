use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait RefreshProductListUseCase: Send + Sync {
    /// Returns how many products the service reported.
    async fn execute(&self) -> Result<usize, ProductError>;
}
