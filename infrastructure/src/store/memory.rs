//! In-memory document store
//!
//! Reference implementation of the three store ports, used by tests and
//! single-process deployments. Each logical table is a map under its own
//! async mutex; `create_if_absent` checks and writes under one lock hold,
//! which is exactly the atomicity the match race relies on.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use swipematch_application::ports::{
    CreateOutcome, MatchStore, ReadConsistency, RoomStore, StoreError, VoteStore,
};
use swipematch_domain::{CandidateId, Match, ParticipantId, Room, RoomId, Vote, VoteKey};
use tokio::sync::Mutex;

/// All three tables in one process-local store
///
/// Every read here is trivially read-your-writes, so the
/// [`ReadConsistency`] argument is accepted and ignored.
#[derive(Default)]
pub struct MemoryStore {
    rooms: Mutex<HashMap<RoomId, Room>>,
    votes: Mutex<HashMap<VoteKey, Vote>>,
    matches: Mutex<HashMap<(RoomId, CandidateId), Match>>,
    /// When set, every operation fails with a transient error
    fail: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a room, standing in for the external room-creation flow
    pub async fn insert_room(&self, room: Room) {
        self.rooms.lock().await.insert(room.id.clone(), room);
    }

    /// Toggle simulated transient failures (for fail-open tests)
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(StoreError::Transient("memory store failure injected".into()))
        } else {
            Ok(())
        }
    }

    /// Number of stored vote records, sentinels included
    pub async fn vote_count(&self) -> usize {
        self.votes.lock().await.len()
    }

    /// Number of stored match records
    pub async fn match_count(&self) -> usize {
        self.matches.lock().await.len()
    }
}

#[async_trait]
impl RoomStore for MemoryStore {
    async fn fetch_room(&self, room_id: &RoomId) -> Result<Option<Room>, StoreError> {
        self.check_available()?;
        Ok(self.rooms.lock().await.get(room_id).cloned())
    }
}

#[async_trait]
impl VoteStore for MemoryStore {
    async fn upsert_vote(&self, vote: &Vote) -> Result<(), StoreError> {
        self.check_available()?;
        self.votes.lock().await.insert(vote.key(), vote.clone());
        Ok(())
    }

    async fn votes_for_candidate(
        &self,
        room_id: &RoomId,
        candidate_id: CandidateId,
        _consistency: ReadConsistency,
    ) -> Result<Vec<Vote>, StoreError> {
        self.check_available()?;
        Ok(self
            .votes
            .lock()
            .await
            .values()
            .filter(|v| v.room_id == *room_id && v.candidate_id == candidate_id)
            .cloned()
            .collect())
    }

    async fn votes_for_room(
        &self,
        room_id: &RoomId,
        _consistency: ReadConsistency,
    ) -> Result<Vec<Vote>, StoreError> {
        self.check_available()?;
        Ok(self
            .votes
            .lock()
            .await
            .values()
            .filter(|v| v.room_id == *room_id)
            .cloned()
            .collect())
    }

    async fn has_vote_for_participant(
        &self,
        room_id: &RoomId,
        participant_id: &ParticipantId,
    ) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self
            .votes
            .lock()
            .await
            .values()
            .any(|v| v.room_id == *room_id && v.participant_id == *participant_id))
    }
}

#[async_trait]
impl MatchStore for MemoryStore {
    async fn create_if_absent(&self, record: &Match) -> Result<CreateOutcome, StoreError> {
        self.check_available()?;
        // Check and insert under one lock hold
        let mut matches = self.matches.lock().await;
        let key = (record.room_id.clone(), record.candidate_id());
        match matches.get(&key) {
            Some(existing) => Ok(CreateOutcome::AlreadyExists(existing.clone())),
            None => {
                matches.insert(key, record.clone());
                Ok(CreateOutcome::Created)
            }
        }
    }

    async fn fetch_match(
        &self,
        room_id: &RoomId,
        candidate_id: CandidateId,
    ) -> Result<Option<Match>, StoreError> {
        self.check_available()?;
        Ok(self
            .matches
            .lock()
            .await
            .get(&(room_id.clone(), candidate_id))
            .cloned())
    }
}
