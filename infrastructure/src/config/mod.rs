//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, GatewayConfig, MatchingConfig, StoreConfig};
pub use loader::ConfigLoader;
