use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// GraphQL API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
/// - config/: Application configuration (server, CORS, catalog)
/// - setup/: Dependency injection and server setup
/// - api/: GraphQL schema, resolvers and the health endpoint
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(
        seed = config.catalog.seed,
        update_policy = %config.catalog.update_policy,
        "catalog configuration loaded"
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.catalog);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
