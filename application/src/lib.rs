//! Application layer for swipematch
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.
//!
//! The control flow for one vote: [`SubmitVoteUseCase`] validates and
//! persists the swipe; a positive swipe triggers [`MatchDetector`], whose
//! conditional match create decides the unique winner under concurrency;
//! the winner's [`BroadcastMatchUseCase`] fans the match out to every
//! matched participant and the room channel.

pub mod access;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use access::{Access, AccessPolicy, RoomAccessGuard};
pub use config::MatchingSettings;
pub use ports::{
    CreateOutcome, GatewayError, MatchStore, ReadConsistency, RealtimeGateway, RoomStore,
    StoreError, VoteStore,
};
pub use use_cases::broadcast_match::{BroadcastMatchUseCase, BroadcastReport, DispatchTarget};
pub use use_cases::detect_match::{DetectMatchError, MatchDetector, MatchOutcome};
pub use use_cases::submit_vote::{
    SubmitVoteError, SubmitVoteInput, SubmitVoteOutput, SubmitVoteUseCase, VoteOutcome,
};
