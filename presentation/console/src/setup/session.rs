use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

use business::application::product_list::store::ProductListStore;
use business::domain::form::use_cases::begin_edit::{BeginEditParams, EditTarget};
use business::domain::product::model::Product;
use business::domain::product::value_objects::{ImageHandle, ProductId};
use business::domain::product_list::use_cases::delete::DeleteProductParams;
use rest_client::client::ApiClient;

use crate::setup::dependency_injection::DependencyContainer;
use crate::ui::command::{Command, CommandError, HELP};
use crate::ui::render;
use crate::ui::validation::check_required;

/// Interactive loop: reads commands from stdin and forwards them to the
/// form and list use cases.
///
/// Network actions run as background tasks so input stays live while a
/// request is in flight. Overlapping requests are allowed; on exit the
/// session waits for every issued request to finish.
pub struct Session {
    container: DependencyContainer,
    tasks: JoinSet<()>,
}

impl Session {
    pub fn new(container: DependencyContainer) -> Self {
        Self {
            container,
            tasks: JoinSet::new(),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        println!("Product Management (type `help` for commands)");
        self.spawn_refresh();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            self.reap_finished();
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command).await,
                Err(CommandError::Empty) => {}
                Err(e) => println!("{}", e),
            }
        }

        while let Some(result) = self.tasks.join_next().await {
            log_join_error(result);
        }
        Ok(())
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::List => self.print_list(),
            Command::Show => println!("{}", render::form(&self.container.form.snapshot())),
            Command::Refresh => self.spawn_refresh(),
            Command::Set { field, value } => self.container.form.set_field(field, value),
            Command::Image(path) => self.container.form.set_image(ImageHandle::new(path)),
            Command::Edit(reference) => match self.listed(&reference) {
                Some(product) => {
                    let params = BeginEditParams {
                        target: EditTarget::Record(product),
                    };
                    if let Err(e) = self.container.begin_edit.execute(params).await {
                        debug!("Edit failed: {}", e);
                    }
                    println!("{}", render::form(&self.container.form.snapshot()));
                }
                None => println!("No listed product `{}`", reference),
            },
            Command::Load(id) => self.spawn_load(ProductId::new(id)),
            Command::Cancel => {
                self.container.form.reset();
                println!("{}", render::form(&self.container.form.snapshot()));
            }
            Command::Submit => match check_required(&self.container.form.snapshot().draft) {
                Ok(()) => self.spawn_submit(),
                Err(e) => println!("{}", e),
            },
            Command::Delete(reference) => {
                let id = self
                    .listed(&reference)
                    .map(|product| product.id)
                    .unwrap_or_else(|| ProductId::new(reference));
                self.spawn_delete(id);
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => {}
        }
    }

    /// Looks a product up in the current list by id, then by 1-based position.
    fn listed(&self, reference: &str) -> Option<Product> {
        let products = self.container.list.products();
        if let Some(product) = products.iter().find(|p| p.id.as_str() == reference) {
            return Some(product.clone());
        }
        reference
            .trim_start_matches('#')
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| products.get(index).cloned())
    }

    fn print_list(&self) {
        print_list(&self.container.list, self.container.assets.as_ref());
    }

    fn spawn_refresh(&mut self) {
        let refresh = self.container.refresh.clone();
        let list = self.container.list.clone();
        let assets = self.container.assets.clone();
        self.tasks.spawn(async move {
            if refresh.execute().await.is_ok() {
                print_list(&list, assets.as_ref());
            }
        });
    }

    fn spawn_submit(&mut self) {
        let submit = self.container.submit.clone();
        let list = self.container.list.clone();
        let assets = self.container.assets.clone();
        self.tasks.spawn(async move {
            match submit.execute().await {
                Ok(outcome) => {
                    debug!("Submit finished: {:?}", outcome);
                    print_list(&list, assets.as_ref());
                }
                Err(e) => debug!("Submit failed: {}", e),
            }
        });
    }

    fn spawn_delete(&mut self, id: ProductId) {
        let delete = self.container.delete.clone();
        let list = self.container.list.clone();
        let assets = self.container.assets.clone();
        self.tasks.spawn(async move {
            match delete.execute(DeleteProductParams { id }).await {
                Ok(()) => print_list(&list, assets.as_ref()),
                Err(e) => debug!("Delete failed: {}", e),
            }
        });
    }

    fn spawn_load(&mut self, id: ProductId) {
        let begin_edit = self.container.begin_edit.clone();
        let form = self.container.form.clone();
        self.tasks.spawn(async move {
            let params = BeginEditParams {
                target: EditTarget::Id(id),
            };
            match begin_edit.execute(params).await {
                Ok(_) => println!("{}", render::form(&form.snapshot())),
                Err(e) => debug!("Load failed: {}", e),
            }
        });
    }

    fn reap_finished(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            log_join_error(result);
        }
    }
}

fn print_list(list: &Arc<ProductListStore>, assets: Option<&ApiClient>) {
    println!("{}", render::product_list(&list.products(), assets));
}

fn log_join_error(result: Result<(), JoinError>) {
    if let Err(e) = result {
        warn!("Background request aborted: {}", e);
    }
}
