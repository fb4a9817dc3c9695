use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::form::state::{FormMode, FormState};
use crate::domain::form::use_cases::submit::{SubmitFormUseCase, SubmitOutcome};
use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::sink::NotificationSink;
use crate::domain::product::errors::ProductError;
use crate::domain::product::service::ProductService;
use crate::domain::product_list::use_cases::refresh::RefreshProductListUseCase;

use super::store::FormStore;

/// Sends the current draft: a create in `Create` mode, a partial update of
/// the target in `Edit` mode.
pub struct SubmitFormUseCaseImpl {
    pub form: Arc<FormStore>,
    pub service: Arc<dyn ProductService>,
    pub refresh: Arc<dyn RefreshProductListUseCase>,
    pub notifier: Arc<dyn NotificationSink>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitFormUseCase for SubmitFormUseCaseImpl {
    async fn execute(&self) -> Result<SubmitOutcome, ProductError> {
        let FormState { draft, mode } = self.form.snapshot();

        let result = match &mode {
            FormMode::Create => {
                self.logger
                    .info(&format!("Creating product: {}", draft.name));
                self.service
                    .create(&draft)
                    .await
                    .map(|()| SubmitOutcome::Created)
            }
            FormMode::Edit(id) => {
                self.logger.info(&format!("Updating product: {}", id));
                self.service
                    .update(id, &draft)
                    .await
                    .map(|()| SubmitOutcome::Updated(id.clone()))
            }
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                // Draft and mode stay as they were so the user can retry.
                self.logger
                    .error(&format!("Error submitting form: {}", e));
                self.notifier
                    .notify(Notification::error("Error submitting form", &e));
                return Err(ProductError::from_service(e));
            }
        };

        self.form.reset();
        if let Err(e) = self.refresh.execute().await {
            self.logger
                .warn(&format!("List refresh after submit failed: {}", e));
        }

        let message = match &outcome {
            SubmitOutcome::Created => "Product created successfully",
            SubmitOutcome::Updated(_) => "Product updated successfully",
        };
        self.notifier.notify(Notification::success(message));
        self.logger.info(message);
        Ok(outcome)
    }
}
