pub mod app_config;
pub mod cors_config;
pub mod server_config;
