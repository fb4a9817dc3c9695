use std::sync::Arc;

use logger::TracingLogger;
use memory::InMemoryProductService;
use rest_client::client::ApiClient;
use rest_client::product_service::ProductServiceHttp;

use business::application::form::begin_edit::BeginEditUseCaseImpl;
use business::application::form::store::FormStore;
use business::application::form::submit::SubmitFormUseCaseImpl;
use business::application::product_list::delete::DeleteProductUseCaseImpl;
use business::application::product_list::refresh::RefreshProductListUseCaseImpl;
use business::application::product_list::store::ProductListStore;
use business::domain::form::use_cases::begin_edit::BeginEditUseCase;
use business::domain::form::use_cases::submit::SubmitFormUseCase;
use business::domain::logger::Logger;
use business::domain::notification::sink::NotificationSink;
use business::domain::product::service::ProductService;
use business::domain::product_list::use_cases::delete::DeleteProductUseCase;
use business::domain::product_list::use_cases::refresh::RefreshProductListUseCase;

use crate::config::service_config::{Backend, ServiceConfig};
use crate::ui::notifier::ConsoleNotifier;

pub struct DependencyContainer {
    pub form: Arc<FormStore>,
    pub list: Arc<ProductListStore>,
    pub refresh: Arc<dyn RefreshProductListUseCase>,
    pub delete: Arc<dyn DeleteProductUseCase>,
    pub submit: Arc<dyn SubmitFormUseCase>,
    pub begin_edit: Arc<dyn BeginEditUseCase>,
    /// Resolves image paths for display; absent for the in-memory backend.
    pub assets: Option<ApiClient>,
}

impl DependencyContainer {
    pub fn new(config: &ServiceConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let notifier: Arc<dyn NotificationSink> = Arc::new(ConsoleNotifier);

        // Infrastructure adapters
        let (service, assets): (Arc<dyn ProductService>, Option<ApiClient>) = match config.backend {
            Backend::Http => {
                let client = ApiClient::new(config.base_url.clone(), config.timeout);
                logger.info(&format!("Using product service at {}", client.base_url));
                let service: Arc<dyn ProductService> =
                    Arc::new(ProductServiceHttp::new(client.clone()));
                (service, Some(client))
            }
            Backend::Memory => {
                logger.info("Using in-memory product service");
                let service: Arc<dyn ProductService> = Arc::new(InMemoryProductService::new());
                (service, None)
            }
        };

        // State containers
        let form = Arc::new(FormStore::new());
        let list = Arc::new(ProductListStore::new());

        // Product list use cases
        let refresh: Arc<dyn RefreshProductListUseCase> = Arc::new(RefreshProductListUseCaseImpl {
            store: list.clone(),
            service: service.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let delete = Arc::new(DeleteProductUseCaseImpl {
            service: service.clone(),
            refresh: refresh.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });

        // Form use cases
        let submit = Arc::new(SubmitFormUseCaseImpl {
            form: form.clone(),
            service: service.clone(),
            refresh: refresh.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let begin_edit = Arc::new(BeginEditUseCaseImpl {
            form: form.clone(),
            list: list.clone(),
            service,
            notifier,
            logger,
        });

        Self {
            form,
            list,
            refresh,
            delete,
            submit,
            begin_edit,
            assets,
        }
    }
}
