//! Real-time gateway adapters

pub mod channel;
#[cfg(feature = "http-gateway")]
pub mod http;

pub use channel::{ChannelGateway, DispatchedEvent};
#[cfg(feature = "http-gateway")]
pub use http::HttpGateway;
