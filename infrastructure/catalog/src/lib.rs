pub mod client;
pub mod fake_store;
