use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

pub enum EditTarget {
    /// A record already shown in the product list.
    Record(Product),
    /// Only the identifier is known; the record is fetched first.
    Id(ProductId),
}

pub struct BeginEditParams {
    pub target: EditTarget,
}

#[async_trait]
pub trait BeginEditUseCase: Send + Sync {
    async fn execute(&self, params: BeginEditParams) -> Result<Product, ProductError>;
}
