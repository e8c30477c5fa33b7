//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Quorum size must be at least 2, got {0}")]
    QuorumTooSmall(u32),

    #[error("Candidate list must not be empty")]
    NoCandidates,

    #[error("Duplicate candidate id {0} in candidate list")]
    DuplicateCandidate(i64),

    #[error("The participation sentinel cannot appear in a candidate list")]
    SentinelCandidate,

    #[error("Invalid match policy: {0}")]
    InvalidPolicy(String),
}
