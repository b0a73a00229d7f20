use std::sync::Arc;

use crate::domain::auth::repository::SessionRepository;
use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::order::repository::OrderRepository;
use crate::domain::wishlist::repository::WishlistRepository;

/// Best-effort sequential clear of all four collections. Not atomic:
/// a failure in one collection does not stop the others.
pub async fn clear_all_data(
    cart: &Arc<dyn CartRepository>,
    orders: &Arc<dyn OrderRepository>,
    wishlist: &Arc<dyn WishlistRepository>,
    session: &Arc<dyn SessionRepository>,
    logger: &Arc<dyn Logger>,
) {
    logger.info("Clearing all persisted data");

    if let Err(e) = cart.clear().await {
        logger.warn(&format!("Failed to clear cart collection: {}", e));
    }
    if let Err(e) = orders.clear().await {
        logger.warn(&format!("Failed to clear orders collection: {}", e));
    }
    if let Err(e) = wishlist.clear().await {
        logger.warn(&format!("Failed to clear wishlist collection: {}", e));
    }
    if let Err(e) = session.clear().await {
        logger.warn(&format!("Failed to clear auth collection: {}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::model::User;
    use crate::domain::cart::model::CartItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::Order;
    use crate::domain::wishlist::model::WishlistItem;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait::async_trait]
        impl CartRepository for CartRepo {
            async fn get_all(&self) -> Result<Vec<CartItem>, RepositoryError>;
            async fn save(&self, item: &CartItem) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub OrderRepo {}

        #[async_trait::async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
            async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub WishlistRepo {}

        #[async_trait::async_trait]
        impl WishlistRepository for WishlistRepo {
            async fn get_all(&self) -> Result<Vec<WishlistItem>, RepositoryError>;
            async fn save(&self, item: &WishlistItem) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub SessionRepo {}

        #[async_trait::async_trait]
        impl SessionRepository for SessionRepo {
            async fn get_current(&self) -> Result<Option<User>, RepositoryError>;
            async fn set_current(&self, user: &User) -> Result<(), RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_clear_every_collection() {
        let mut cart = MockCartRepo::new();
        cart.expect_clear().times(1).returning(|| Ok(()));
        let mut orders = MockOrderRepo::new();
        orders.expect_clear().times(1).returning(|| Ok(()));
        let mut wishlist = MockWishlistRepo::new();
        wishlist.expect_clear().times(1).returning(|| Ok(()));
        let mut session = MockSessionRepo::new();
        session.expect_clear().times(1).returning(|| Ok(()));

        clear_all_data(
            &(Arc::new(cart) as Arc<dyn CartRepository>),
            &(Arc::new(orders) as Arc<dyn OrderRepository>),
            &(Arc::new(wishlist) as Arc<dyn WishlistRepository>),
            &(Arc::new(session) as Arc<dyn SessionRepository>),
            &mock_logger(),
        )
        .await;
    }

    #[tokio::test]
    async fn should_keep_clearing_after_a_failure() {
        let mut cart = MockCartRepo::new();
        cart.expect_clear()
            .times(1)
            .returning(|| Err(RepositoryError::DatabaseError));
        let mut orders = MockOrderRepo::new();
        orders.expect_clear().times(1).returning(|| Ok(()));
        let mut wishlist = MockWishlistRepo::new();
        wishlist.expect_clear().times(1).returning(|| Ok(()));
        let mut session = MockSessionRepo::new();
        session.expect_clear().times(1).returning(|| Ok(()));

        clear_all_data(
            &(Arc::new(cart) as Arc<dyn CartRepository>),
            &(Arc::new(orders) as Arc<dyn OrderRepository>),
            &(Arc::new(wishlist) as Arc<dyn WishlistRepository>),
            &(Arc::new(session) as Arc<dyn SessionRepository>),
            &mock_logger(),
        )
        .await;
    }
}
