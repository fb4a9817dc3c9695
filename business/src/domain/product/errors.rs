use crate::domain::errors::ServiceError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.service")]
    Service(#[from] ServiceError),
}

impl ProductError {
    /// Lifts a service failure, keeping "not found" as a product-level error.
    pub fn from_service(error: ServiceError) -> Self {
        match error {
            ServiceError::NotFound => ProductError::NotFound,
            other => ProductError::Service(other),
        }
    }
}
