use std::sync::Arc;

use logger::TracingLogger;

use business::application::auth::AuthStore;
use business::application::cart::CartStore;
use business::application::orders::OrdersStore;
use business::application::wishlist::WishlistStore;
use business::domain::auth::model::DemoCredentials;
use business::domain::catalog::services::CatalogService;

use catalog::client::CatalogClient;
use catalog::fake_store::FakeStoreCatalog;
use persistence::auth::repository::SessionRepositorySqlite;
use persistence::cart::repository::CartRepositorySqlite;
use persistence::order::repository::OrderRepositorySqlite;
use persistence::wishlist::repository::WishlistRepositorySqlite;

use crate::config::catalog_config::CatalogConfig;

/// Owns the domain stores and hands them to the presentation layer.
/// Stores are explicit, context-passed containers, never ambient globals.
pub struct DependencyContainer {
    pub cart_store: Arc<CartStore>,
    pub wishlist_store: Arc<WishlistStore>,
    pub orders_store: Arc<OrdersStore>,
    pub auth_store: Arc<AuthStore>,
    pub catalog_service: Arc<dyn CatalogService>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::SqlitePool, catalog_config: &CatalogConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositorySqlite::new(pool.clone()));
        let wishlist_repository = Arc::new(WishlistRepositorySqlite::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositorySqlite::new(pool.clone()));
        let session_repository = Arc::new(SessionRepositorySqlite::new(pool));

        let catalog_client = CatalogClient::new(catalog_config.base_url.clone());
        let catalog_service = Arc::new(FakeStoreCatalog::new(catalog_client));

        // Domain stores
        let cart_store = Arc::new(CartStore::new(cart_repository, logger.clone()));
        let wishlist_store = Arc::new(WishlistStore::new(wishlist_repository, logger.clone()));
        let orders_store = Arc::new(OrdersStore::new(order_repository, logger.clone()));
        let auth_store = Arc::new(AuthStore::new(
            session_repository,
            logger,
            DemoCredentials::default(),
        ));

        Self {
            cart_store,
            wishlist_store,
            orders_store,
            auth_store,
            catalog_service,
        }
    }

    /// One-time load of every collection into memory. Each store fails
    /// open on its own, so a broken collection never blocks the rest.
    pub async fn initialize_stores(&self) {
        self.cart_store.initialize().await;
        self.wishlist_store.initialize().await;
        self.orders_store.initialize().await;
        self.auth_store.initialize().await;
    }

    /// Drains every write-behind queue; called before shutdown so the
    /// last in-memory state reaches storage.
    pub async fn flush_stores(&self) {
        self.cart_store.flush().await;
        self.wishlist_store.flush().await;
        self.orders_store.flush().await;
        self.auth_store.flush().await;
    }
}
