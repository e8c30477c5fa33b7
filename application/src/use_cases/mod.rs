//! Use cases: vote intake, match detection, and broadcast

pub mod broadcast_match;
pub mod detect_match;
pub mod submit_vote;

pub use broadcast_match::{BroadcastMatchUseCase, BroadcastReport, DispatchTarget};
pub use detect_match::{DetectMatchError, MatchDetector, MatchOutcome};
pub use submit_vote::{
    SubmitVoteError, SubmitVoteInput, SubmitVoteOutput, SubmitVoteUseCase, VoteOutcome,
};
