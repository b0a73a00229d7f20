use dotenvy::dotenv;

mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::dependency_injection::DependencyContainer;

/// Storefront composition root
///
/// Opens the local store, wires the domain stores, and restores the
/// previous session's state. The presentation layer (whatever renders
/// the storefront) receives the container and drives the stores from
/// there; this binary doubles as a smoke check of the wiring.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Open the local database and create the collections
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config.catalog);

    // 6. Restore persisted state into memory
    container.initialize_stores().await;

    tracing::info!(
        "Storefront ready: {} cart item(s), {} wishlisted, {} order(s), logged in: {}",
        container.cart_store.total_items(),
        container.wishlist_store.item_count(),
        container.orders_store.order_count(),
        container.auth_store.is_logged_in(),
    );

    container.flush_stores().await;
    Ok(())
}
