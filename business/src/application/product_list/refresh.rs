use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::sink::NotificationSink;
use crate::domain::product::errors::ProductError;
use crate::domain::product::service::ProductService;
use crate::domain::product_list::state::ProductListEvent;
use crate::domain::product_list::use_cases::refresh::RefreshProductListUseCase;

use super::store::ProductListStore;

pub struct RefreshProductListUseCaseImpl {
    pub store: Arc<ProductListStore>,
    pub service: Arc<dyn ProductService>,
    pub notifier: Arc<dyn NotificationSink>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshProductListUseCase for RefreshProductListUseCaseImpl {
    async fn execute(&self) -> Result<usize, ProductError> {
        let ticket = self.store.next_ticket();
        self.logger
            .info(&format!("Fetching products (refresh #{})", ticket));

        let products = match self.service.list().await {
            Ok(products) => products,
            Err(e) => {
                self.logger
                    .error(&format!("Error fetching products: {}", e));
                self.notifier
                    .notify(Notification::error("Error fetching products", &e));
                return Err(ProductError::from_service(e));
            }
        };

        let count = products.len();
        let state = self
            .store
            .dispatch(ProductListEvent::Loaded { ticket, products });
        if state.applied_ticket != ticket {
            self.logger.debug(&format!(
                "Discarded refresh #{} superseded by #{}",
                ticket, state.applied_ticket
            ));
        }

        self.logger.info(&format!("Found {} products", count));
        Ok(count)
    }
}
