pub mod config;
pub mod models;

pub const SERVICE_NAME: &str = "album-service";
