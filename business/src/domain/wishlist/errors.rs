#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.title_empty")]
    TitleEmpty,
}
