//! Ports consumed by the use cases
//!
//! Each port is an async trait implemented by an infrastructure adapter:
//! the three durable stores sit on a key-value/document store, the realtime
//! gateway on a pub-sub service. Use cases only ever see these traits.

pub mod match_store;
pub mod realtime_gateway;
pub mod room_store;
pub mod vote_store;

pub use match_store::{CreateOutcome, MatchStore};
pub use realtime_gateway::{GatewayError, RealtimeGateway};
pub use room_store::RoomStore;
pub use vote_store::{ReadConsistency, VoteStore};

use thiserror::Error;

/// Errors surfaced by the durable store ports
///
/// `Transient` covers I/O hiccups the caller may retry; `Corrupt` means a
/// stored record could not be decoded and retrying will not help. Raw
/// driver error text stays inside the variant message and is never
/// re-surfaced past the use-case error taxonomy.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Transient store failure: {0}")]
    Transient(String),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

impl StoreError {
    /// Whether a retry of the same operation could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Transient(_))
    }
}
