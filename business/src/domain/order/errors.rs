#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.items_empty")]
    ItemsEmpty,
}
