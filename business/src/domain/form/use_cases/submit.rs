use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated(ProductId),
}

#[async_trait]
pub trait SubmitFormUseCase: Send + Sync {
    async fn execute(&self) -> Result<SubmitOutcome, ProductError>;
}
