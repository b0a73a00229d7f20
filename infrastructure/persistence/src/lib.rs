pub mod db;
pub mod auth {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod wishlist {
    pub mod entity;
    pub mod repository;
}
