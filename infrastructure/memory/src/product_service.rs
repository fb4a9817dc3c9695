use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use business::domain::errors::ServiceError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::service::ProductService;
use business::domain::product::value_objects::{ImageHandle, ProductId};

/// Product service kept in process memory.
///
/// Behaves like the REST collection: identifiers are generated on create,
/// updates are partial (a missing image keeps the stored one) and unknown
/// identifiers answer `NotFound`.
#[derive(Debug, Default)]
pub struct InMemoryProductService {
    products: RwLock<Vec<Product>>,
    next_failure: Mutex<Option<ServiceError>>,
}

impl InMemoryProductService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            next_failure: Mutex::new(None),
        }
    }

    /// Makes the next call, whatever it is, fail with `error`.
    pub fn fail_next(&self, error: ServiceError) {
        if let Ok(mut slot) = self.next_failure.lock() {
            *slot = Some(error);
        }
    }

    fn take_failure(&self) -> Result<(), ServiceError> {
        match self.next_failure.lock() {
            Ok(mut slot) => slot.take().map_or(Ok(()), Err),
            Err(_) => Ok(()),
        }
    }

    fn asset_path(handle: &ImageHandle) -> String {
        format!("uploads/{}", handle.file_name())
    }
}

#[async_trait]
impl ProductService for InMemoryProductService {
    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        self.take_failure()?;
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, ServiceError> {
        self.take_failure()?;
        self.products
            .read()
            .await
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<(), ServiceError> {
        self.take_failure()?;
        let product = Product {
            id: ProductId::new(Uuid::new_v4().simple().to_string()),
            name: draft.name.clone(),
            color: draft.color.clone(),
            price: draft.price.clone(),
            description: draft.description.clone(),
            image: draft.image.as_ref().map(Self::asset_path),
        };
        debug!(id = %product.id, "stored product in memory");
        self.products.write().await.push(product);
        Ok(())
    }

    async fn update(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), ServiceError> {
        self.take_failure()?;
        let mut products = self.products.write().await;
        let product = products
            .iter_mut()
            .find(|product| &product.id == id)
            .ok_or(ServiceError::NotFound)?;

        product.name = draft.name.clone();
        product.color = draft.color.clone();
        product.price = draft.price.clone();
        product.description = draft.description.clone();
        if let Some(handle) = &draft.image {
            product.image = Some(Self::asset_path(handle));
        }
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ServiceError> {
        self.take_failure()?;
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|product| &product.id != id);
        if products.len() == before {
            return Err(ServiceError::NotFound);
        }
        Ok(())
    }
}
