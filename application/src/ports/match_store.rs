//! Match store port
//!
//! The conditional create here is the sole concurrency-control primitive in
//! the whole design: no locks, no leader election, no queues.

use super::StoreError;
use async_trait::async_trait;
use swipematch_domain::{CandidateId, Match, RoomId};

/// Outcome of a conditional match create
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// This caller won the race and owns the single broadcast
    Created,
    /// Another caller got there first; the existing record is returned
    /// unchanged
    AlreadyExists(Match),
}

impl CreateOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created)
    }
}

/// Durable, write-once match records, one per (room, candidate)
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Create the match only if no record exists at its composite key
    ///
    /// Implementations must make the existence check and the write a single
    /// atomic step; `AlreadyExists` must carry the record that won.
    async fn create_if_absent(&self, record: &Match) -> Result<CreateOutcome, StoreError>;

    /// Point read by composite key
    async fn fetch_match(
        &self,
        room_id: &RoomId,
        candidate_id: CandidateId,
    ) -> Result<Option<Match>, StoreError>;
}
