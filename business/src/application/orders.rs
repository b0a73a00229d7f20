use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::application::write_queue::WriteQueue;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{NewOrderProps, Order};
use crate::domain::order::repository::OrderRepository;

#[derive(Default)]
struct OrdersState {
    orders: Vec<Order>,
    is_initialized: bool,
}

/// In-memory canonical view of the order history. Orders are only ever
/// appended; there is no update or cancel path.
pub struct OrdersStore {
    repository: Arc<dyn OrderRepository>,
    logger: Arc<dyn Logger>,
    queue: WriteQueue,
    state: Mutex<OrdersState>,
    changes: watch::Sender<u64>,
}

impl OrdersStore {
    pub fn new(repository: Arc<dyn OrderRepository>, logger: Arc<dyn Logger>) -> Self {
        let queue = WriteQueue::spawn("orders", Arc::clone(&logger));
        Self {
            repository,
            logger,
            queue,
            state: Mutex::new(OrdersState::default()),
            changes: watch::Sender::new(0),
        }
    }

    /// Loads the persisted order history. Idempotent; fails open with an
    /// empty history.
    pub async fn initialize(&self) {
        if self.state().is_initialized {
            return;
        }

        match self.repository.get_all().await {
            Ok(orders) => {
                let mut state = self.state();
                if !state.is_initialized {
                    state.orders = orders;
                    state.is_initialized = true;
                }
            }
            Err(e) => {
                self.logger
                    .error(&format!("Failed to initialize orders: {}", e));
                self.state().is_initialized = true;
            }
        }
        self.notify();
    }

    /// Creates the order and returns its id immediately. The persisted
    /// insert is enqueued, not awaited: the caller may navigate to a
    /// confirmation view before the write is durable, and the in-memory
    /// order already resolves by id.
    pub fn add_order(&self, props: NewOrderProps) -> Result<String, OrderError> {
        let order = Order::new(props)?;
        let order_id = order.id.clone();

        self.state().orders.push(order.clone());

        self.logger.info(&format!(
            "Order {} placed: {} items, total {:.2}",
            order.id,
            order.items.len(),
            order.total_amount
        ));

        let repository = Arc::clone(&self.repository);
        self.queue.enqueue(async move { repository.save(&order).await });
        self.notify();
        Ok(order_id)
    }

    /// Pure lookup in current memory, `None` if absent, including
    /// transiently before initialization completes.
    pub fn get_order_by_id(&self, order_id: &str) -> Option<Order> {
        self.state().orders.iter().find(|o| o.id == order_id).cloned()
    }

    /// Snapshot of the order history, in insertion order.
    pub fn orders(&self) -> Vec<Order> {
        self.state().orders.clone()
    }

    pub fn order_count(&self) -> usize {
        self.state().orders.len()
    }

    pub fn is_initialized(&self) -> bool {
        self.state().is_initialized
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Resolves once every previously issued persistence write has landed.
    pub async fn flush(&self) {
        self.queue.flush().await;
    }

    fn state(&self) -> MutexGuard<'_, OrdersState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.changes.send_modify(|version| *version += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, NewCartItemProps};
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::value_objects::{OrderStatus, PaymentMethod, ShippingAddress};
    use mockall::mock;

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

    fn sample_address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Demo User".to_string(),
            email: "demo@megamart.com".to_string(),
            phone: "5551234567".to_string(),
            address: "1 Main Street".to_string(),
            city: "Pune".to_string(),
            state: "MH".to_string(),
            pincode: "411001".to_string(),
        }
    }

    fn cart_snapshot() -> Vec<CartItem> {
        vec![
            CartItem::new(NewCartItemProps {
                product_id: 1,
                title: "Backpack".to_string(),
                price: 109.95,
                image: String::new(),
                quantity: 2,
            })
            .unwrap(),
        ]
    }

    fn order_props(items: Vec<CartItem>) -> NewOrderProps {
        let total_amount = items.iter().map(CartItem::line_total).sum();
        NewOrderProps {
            items,
            total_amount,
            shipping_address: sample_address(),
            payment_method: PaymentMethod::Cod,
            status: OrderStatus::Confirmed,
        }
    }

    #[tokio::test]
    async fn should_resolve_new_order_by_id_immediately() {
        let mut repo = MockOrderRepo::new();
        repo.expect_save().returning(|_| Ok(()));
        let store = OrdersStore::new(Arc::new(repo), mock_logger());

        let snapshot = cart_snapshot();
        let order_id = store.add_order(order_props(snapshot.clone())).unwrap();

        // No flush: the in-memory order must resolve before durability.
        let order = store.get_order_by_id(&order_id).unwrap();
        assert_eq!(order.items, snapshot);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(store.order_count(), 1);
    }

    #[tokio::test]
    async fn should_snapshot_items_by_value() {
        let mut repo = MockOrderRepo::new();
        repo.expect_save().returning(|_| Ok(()));
        let store = OrdersStore::new(Arc::new(repo), mock_logger());

        let mut live_cart = cart_snapshot();
        let order_id = store.add_order(order_props(live_cart.clone())).unwrap();

        // Mutating the caller's list afterwards must not touch the order.
        live_cart[0].quantity = 99;

        let order = store.get_order_by_id(&order_id).unwrap();
        assert_eq!(order.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_return_none_for_unknown_order() {
        let store = OrdersStore::new(Arc::new(MockOrderRepo::new()), mock_logger());

        assert!(store.get_order_by_id("ORD-0-MISSING").is_none());
    }

    #[tokio::test]
    async fn should_reject_order_without_items() {
        let store = OrdersStore::new(Arc::new(MockOrderRepo::new()), mock_logger());

        let result = store.add_order(order_props(vec![]));

        assert!(matches!(result.unwrap_err(), OrderError::ItemsEmpty));
        assert_eq!(store.order_count(), 0);
    }

    #[tokio::test]
    async fn should_fail_open_when_initialization_fails() {
        let mut repo = MockOrderRepo::new();
        repo.expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let store = OrdersStore::new(Arc::new(repo), mock_logger());
        store.initialize().await;

        assert!(store.is_initialized());
        assert_eq!(store.order_count(), 0);
    }
}
