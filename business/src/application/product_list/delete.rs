use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::sink::NotificationSink;
use crate::domain::product::errors::ProductError;
use crate::domain::product::service::ProductService;
use crate::domain::product_list::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product_list::use_cases::refresh::RefreshProductListUseCase;

pub struct DeleteProductUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub refresh: Arc<dyn RefreshProductListUseCase>,
    pub notifier: Arc<dyn NotificationSink>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // No optimistic removal: the row stays visible until the next refresh.
        if let Err(e) = self.service.delete(&params.id).await {
            self.logger
                .error(&format!("Error deleting product {}: {}", params.id, e));
            self.notifier
                .notify(Notification::error("Error deleting product", &e));
            return Err(ProductError::from_service(e));
        }

        self.notifier
            .notify(Notification::success("Product deleted successfully"));
        self.logger.info(&format!("Product deleted: {}", params.id));

        // Refresh failures are notified by the refresh itself.
        if let Err(e) = self.refresh.execute().await {
            self.logger
                .warn(&format!("List refresh after delete failed: {}", e));
        }
        Ok(())
    }
}
