use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::form::state::FormEvent;
use crate::domain::form::use_cases::begin_edit::{BeginEditParams, BeginEditUseCase, EditTarget};
use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::sink::NotificationSink;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::service::ProductService;

use crate::application::product_list::store::ProductListStore;

use super::store::FormStore;

pub struct BeginEditUseCaseImpl {
    pub form: Arc<FormStore>,
    pub list: Arc<ProductListStore>,
    pub service: Arc<dyn ProductService>,
    pub notifier: Arc<dyn NotificationSink>,
    pub logger: Arc<dyn Logger>,
}

impl BeginEditUseCaseImpl {
    async fn resolve(&self, target: EditTarget) -> Result<Product, ProductError> {
        match target {
            EditTarget::Record(product) => Ok(product),
            EditTarget::Id(id) => {
                self.logger.info(&format!("Fetching product: {}", id));
                self.service.get_by_id(&id).await.map_err(|e| {
                    self.logger
                        .error(&format!("Error fetching product {}: {}", id, e));
                    self.notifier
                        .notify(Notification::error("Error fetching product", &e));
                    ProductError::from_service(e)
                })
            }
        }
    }

    /// Only records currently shown in the list may become the edit target.
    fn ensure_listed(&self, product: &Product) -> Result<(), ProductError> {
        if self.list.snapshot().contains(&product.id) {
            return Ok(());
        }
        self.logger
            .warn(&format!("Product {} is not in the product list", product.id));
        self.notifier.notify(Notification::error(
            "Error fetching product",
            ProductError::NotFound,
        ));
        Err(ProductError::NotFound)
    }
}

#[async_trait]
impl BeginEditUseCase for BeginEditUseCaseImpl {
    async fn execute(&self, params: BeginEditParams) -> Result<Product, ProductError> {
        let product = self.resolve(params.target).await?;
        self.ensure_listed(&product)?;

        // Unsaved changes to a previous target are dropped without asking.
        self.form
            .dispatch(FormEvent::EditRequested(product.clone()));

        self.logger.info(&format!("Editing product: {}", product.id));
        self.notifier.notify(Notification::info("Editing product"));
        Ok(product)
    }
}
