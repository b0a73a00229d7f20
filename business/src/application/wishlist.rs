use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::application::write_queue::WriteQueue;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{NewWishlistItemProps, WishlistItem};
use crate::domain::wishlist::repository::WishlistRepository;

#[derive(Default)]
struct WishlistState {
    items: Vec<WishlistItem>,
    is_initialized: bool,
}

/// In-memory canonical view of the wishlist collection: a set keyed by
/// product id, no quantities. Memory is the read-of-record; persistence
/// mirrors it through the write-behind queue.
pub struct WishlistStore {
    repository: Arc<dyn WishlistRepository>,
    logger: Arc<dyn Logger>,
    queue: WriteQueue,
    state: Mutex<WishlistState>,
    changes: watch::Sender<u64>,
}

impl WishlistStore {
    pub fn new(repository: Arc<dyn WishlistRepository>, logger: Arc<dyn Logger>) -> Self {
        let queue = WriteQueue::spawn("wishlist", Arc::clone(&logger));
        Self {
            repository,
            logger,
            queue,
            state: Mutex::new(WishlistState::default()),
            changes: watch::Sender::new(0),
        }
    }

    /// Loads the persisted wishlist into memory. Idempotent; fails open
    /// with an empty list.
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
                self.logger
                    .error(&format!("Failed to initialize wishlist: {}", e));
                self.state().is_initialized = true;
            }
        }
        self.notify();
    }

    /// Adding an already-listed product returns the existing row untouched.
    pub fn add_item(&self, props: NewWishlistItemProps) -> Result<WishlistItem, WishlistError> {
        let mut state = self.state();
        if let Some(existing) = state.items.iter().find(|i| i.product_id == props.product_id) {
            return Ok(existing.clone());
        }

        let item = WishlistItem::new(props)?;
        state.items.push(item.clone());
        drop(state);

        self.logger
            .info(&format!("Wishlisted product {}", item.product_id));
        self.persist_save(item.clone());
        self.notify();
        Ok(item)
    }

    pub fn remove_item(&self, item_id: &str) {
        let mut state = self.state();
        state.items.retain(|i| i.id != item_id);
        drop(state);

        self.persist_delete(item_id.to_string());
        self.notify();
    }

    /// Its own inverse: toggling twice restores the prior membership.
    /// Membership is decided from memory, which is authoritative for the
    /// session; the persisted collection only mirrors it.
    ///
    /// Returns whether the product is wishlisted after the call.
    pub fn toggle(&self, props: NewWishlistItemProps) -> Result<bool, WishlistError> {
        let existing_id = self
            .state()
            .items
            .iter()
            .find(|i| i.product_id == props.product_id)
            .map(|i| i.id.clone());

        match existing_id {
            Some(id) => {
                self.remove_item(&id);
                Ok(false)
            }
            None => {
                self.add_item(props)?;
                Ok(true)
            }
        }
    }

    pub fn is_in_wishlist(&self, product_id: i64) -> bool {
        self.state().items.iter().any(|i| i.product_id == product_id)
    }

    /// Snapshot of the current items, in insertion order.
    pub fn items(&self) -> Vec<WishlistItem> {
        self.state().items.clone()
    }

    pub fn item_count(&self) -> usize {
        self.state().items.len()
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

    fn persist_save(&self, item: WishlistItem) {
        let repository = Arc::clone(&self.repository);
        self.queue.enqueue(async move { repository.save(&item).await });
    }

    fn persist_delete(&self, item_id: String) {
        let repository = Arc::clone(&self.repository);
        self.queue.enqueue(async move { repository.delete(&item_id).await });
    }

    fn state(&self) -> MutexGuard<'_, WishlistState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self) {
        self.changes.send_modify(|version| *version += 1);
    }
}
