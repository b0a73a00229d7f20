use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::application::write_queue::WriteQueue;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartItem, NewCartItemProps};
use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;

#[derive(Default)]
struct CartState {
    items: Vec<CartItem>,
    is_initialized: bool,
}

/// In-memory canonical view of the cart collection.
///
/// Memory is the read-of-record for the session: every mutation updates
/// the in-memory list before returning, and mirrors itself to the
/// repository through the write-behind queue. Repository failures never
/// surface to the caller.
pub struct CartStore {
    repository: Arc<dyn CartRepository>,
    logger: Arc<dyn Logger>,
    queue: WriteQueue,
    state: Mutex<CartState>,
    changes: watch::Sender<u64>,
}

impl CartStore {
    pub fn new(repository: Arc<dyn CartRepository>, logger: Arc<dyn Logger>) -> Self {
        let queue = WriteQueue::spawn("cart", Arc::clone(&logger));
        Self {
            repository,
            logger,
            queue,
            state: Mutex::new(CartState::default()),
            changes: watch::Sender::new(0),
        }
    }

    /// Loads the persisted cart into memory. Idempotent; fails open with
    /// an empty cart so the caller is never blocked on storage.
    pub async fn initialize(&self) {
        if self.state().is_initialized {
            return;
        }

        match self.repository.get_all().await {
            Ok(items) => {
                let mut state = self.state();
                if !state.is_initialized {
                    state.items = items;
                    state.is_initialized = true;
                }
            }
            Err(e) => {
                self.logger.error(&format!("Failed to initialize cart: {}", e));
                self.state().is_initialized = true;
            }
        }
        self.notify();
    }

    /// Upsert-merge: an existing row for the product gains the new
    /// quantity, otherwise a fresh row is inserted.
    pub fn add_item(&self, props: NewCartItemProps) -> Result<CartItem, CartError> {
        if props.quantity == 0 {
            return Err(CartError::QuantityZero);
        }

        let mut state = self.state();
        let item = if let Some(existing) = state
            .items
            .iter_mut()
            .find(|i| i.product_id == props.product_id)
        {
            let merged = existing.with_quantity(existing.quantity + props.quantity);
            *existing = merged.clone();
            merged
        } else {
            let item = CartItem::new(props)?;
            state.items.push(item.clone());
            item
        };
        drop(state);

        self.logger.info(&format!(
            "Cart upsert for product {}: quantity {}",
            item.product_id, item.quantity
        ));
        self.persist_save(item.clone());
        self.notify();
        Ok(item)
    }

    /// A quantity of zero or less removes the row. Unknown ids are a no-op.
    pub fn update_quantity(&self, item_id: &str, quantity: i64) {
        let mut state = self.state();
        let Some(pos) = state.items.iter().position(|i| i.id == item_id) else {
            return;
        };

        if quantity <= 0 {
            state.items.remove(pos);
            drop(state);
            self.persist_delete(item_id.to_string());
        } else {
            let updated = state.items[pos].with_quantity(u32::try_from(quantity).unwrap_or(u32::MAX));
            state.items[pos] = updated.clone();
            drop(state);
            self.persist_save(updated);
        }
        self.notify();
    }

    pub fn remove_item(&self, item_id: &str) {
        let mut state = self.state();
        state.items.retain(|i| i.id != item_id);
        drop(state);

        self.persist_delete(item_id.to_string());
        self.notify();
    }

    pub fn clear_cart(&self) {
        self.state().items.clear();

        let repository = Arc::clone(&self.repository);
        self.queue.enqueue(async move { repository.clear().await });
        self.notify();
    }

    /// Snapshot of the current items, in insertion order.
    pub fn items(&self) -> Vec<CartItem> {
        self.state().items.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.state().is_initialized
    }

    /// Sum of price times quantity over the current items.
    pub fn total_price(&self) -> f64 {
        self.state().items.iter().map(CartItem::line_total).sum()
    }

    /// Number of distinct cart rows.
    pub fn total_items(&self) -> usize {
        self.state().items.len()
    }

    /// Sum of quantities over the current items.
    pub fn item_count(&self) -> u64 {
        self.state()
            .items
            .iter()
            .map(|i| u64::from(i.quantity))
            .sum()
    }

    /// Change notification: the receiver observes a version bump after
    /// every mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Resolves once every previously issued persistence write has landed.
    pub async fn flush(&self) {
        self.queue.flush().await;
    }

    fn persist_save(&self, item: CartItem) {
        let repository = Arc::clone(&self.repository);
        self.queue.enqueue(async move { repository.save(&item).await });
    }

    fn persist_delete(&self, item_id: String) {
        let repository = Arc::clone(&self.repository);
        self.queue.enqueue(async move { repository.delete(&item_id).await });
    }

    fn state(&self) -> MutexGuard<'_, CartState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.changes.send_modify(|version| *version += 1);
    }
}
