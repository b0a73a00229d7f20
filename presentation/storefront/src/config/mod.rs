pub mod app_config;
pub mod catalog_config;
pub mod database_config;
