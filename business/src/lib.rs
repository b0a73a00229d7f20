pub mod application {
    pub mod auth;
    pub mod cart;
    pub mod maintenance;
    pub mod orders;
    pub mod wishlist;
    pub mod write_queue;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
}
