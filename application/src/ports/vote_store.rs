//! Vote store port

use super::StoreError;
use async_trait::async_trait;
use swipematch_domain::{CandidateId, ParticipantId, RoomId, Vote};

/// Consistency level for vote queries
///
/// The recount that follows a positive vote MUST use `Strong`: it has to
/// observe the write that triggered it, otherwise two near-simultaneous
/// votes can each see a stale count one below quorum and neither creates
/// the match. Everything else may read `Eventual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadConsistency {
    /// Read-your-writes; required on the recount path
    Strong,
    /// Possibly stale; acceptable for advisory reads
    #[default]
    Eventual,
}

/// Durable vote records, one per (room, participant, candidate)
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Write a vote, overwriting any record at the same composite key
    async fn upsert_vote(&self, vote: &Vote) -> Result<(), StoreError>;

    /// All votes in a room for one candidate
    async fn votes_for_candidate(
        &self,
        room_id: &RoomId,
        candidate_id: CandidateId,
        consistency: ReadConsistency,
    ) -> Result<Vec<Vote>, StoreError>;

    /// All votes in a room, sentinels included
    async fn votes_for_room(
        &self,
        room_id: &RoomId,
        consistency: ReadConsistency,
    ) -> Result<Vec<Vote>, StoreError>;

    /// Whether any vote record (sentinel included) exists for a participant
    /// in a room
    async fn has_vote_for_participant(
        &self,
        room_id: &RoomId,
        participant_id: &ParticipantId,
    ) -> Result<bool, StoreError>;
}
