//! Infrastructure layer for swipematch
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading: an in-memory
//! document store (tests and single-process deployments), an in-process
//! channel gateway, and an HTTP adapter for an external pub-sub gateway
//! behind the `http-gateway` feature.

pub mod config;
pub mod gateway;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, GatewayConfig, MatchingConfig, StoreConfig};
pub use gateway::{ChannelGateway, DispatchedEvent};
#[cfg(feature = "http-gateway")]
pub use gateway::HttpGateway;
pub use store::MemoryStore;
