#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.title_empty")]
    TitleEmpty,
    #[error("cart.quantity_zero")]
    QuantityZero,
}
