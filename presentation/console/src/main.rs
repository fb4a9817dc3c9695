use dotenvy::dotenv;

mod config;
mod setup;
mod ui;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, session::Session};

/// Console Entry Point
///
/// Loads configuration, wires the product catalog and runs the interactive
/// session until `quit` or end of input.
///
/// - config/: Service endpoint and backend selection
/// - setup/: Dependency injection and the input loop
/// - ui/: Command parsing, rendering and the notification sink
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (RUST_LOG may come from .env)
    dotenv().ok();

    // 2. Initialize tracing on stderr so it does not mix with the rendered UI
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.service);

    // 5. Run the session
    Session::new(container).run().await?;

    Ok(())
}
