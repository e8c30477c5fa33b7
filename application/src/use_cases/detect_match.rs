//! Match detection use case
//!
//! Recomputes quorum state after a positive vote and performs the one
//! conditional create that decides, race-free, which caller owns the match
//! and its single broadcast. Coordination lives entirely in the store's
//! create-if-absent write; there are no locks and no shared counters.

use crate::config::MatchingSettings;
use crate::ports::{CreateOutcome, MatchStore, ReadConsistency, RoomStore, StoreError, VoteStore};
use crate::use_cases::broadcast_match::{BroadcastMatchUseCase, BroadcastReport};
use std::sync::Arc;
use swipematch_domain::{CandidateId, Match, MatchPolicy, RoomId, VoteTally, distinct_participants};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a recheck
#[derive(Error, Debug)]
pub enum DetectMatchError {
    #[error("Room {0} disappeared between vote and recheck")]
    RoomGone(RoomId),

    #[error("Candidate {candidate} is not in room {room}")]
    CandidateGone { room: RoomId, candidate: CandidateId },

    #[error("Store failure during recheck: {0}")]
    Storage(#[from] StoreError),
}

/// A match surfaced by a recheck
#[derive(Debug)]
pub struct MatchOutcome {
    pub record: Match,
    /// Present only on the caller that won the conditional create; the
    /// loser returns the existing record and must not broadcast again.
    pub broadcast: Option<BroadcastReport>,
}

impl MatchOutcome {
    /// Whether this caller created the match (and ran the broadcast)
    pub fn created_here(&self) -> bool {
        self.broadcast.is_some()
    }
}

/// Use case for rechecking quorum state on one candidate
pub struct MatchDetector {
    room_store: Arc<dyn RoomStore>,
    vote_store: Arc<dyn VoteStore>,
    match_store: Arc<dyn MatchStore>,
    broadcaster: BroadcastMatchUseCase,
    settings: MatchingSettings,
}

impl MatchDetector {
    pub fn new(
        room_store: Arc<dyn RoomStore>,
        vote_store: Arc<dyn VoteStore>,
        match_store: Arc<dyn MatchStore>,
        broadcaster: BroadcastMatchUseCase,
        settings: MatchingSettings,
    ) -> Self {
        Self {
            room_store,
            vote_store,
            match_store,
            broadcaster,
            settings,
        }
    }

    /// Recount positive votes for the candidate and attempt the match
    ///
    /// The vote read is `Strong`: it must observe the write that triggered
    /// this recheck, otherwise two near-simultaneous votes could both see a
    /// count one below quorum and neither would create the match.
    pub async fn recheck(
        &self,
        room_id: &RoomId,
        candidate_id: CandidateId,
    ) -> Result<Option<MatchOutcome>, DetectMatchError> {
        let room = self
            .room_store
            .fetch_room(room_id)
            .await?
            .ok_or_else(|| DetectMatchError::RoomGone(room_id.clone()))?;

        let quorum_size = room.quorum_size_or(self.settings.default_quorum_size);

        let votes = self
            .vote_store
            .votes_for_candidate(room_id, candidate_id, ReadConsistency::Strong)
            .await?;
        let tally = VoteTally::from_votes(candidate_id, &votes);

        // Membership only matters for the participant-count-relative policy,
        // so the room-wide scan is skipped otherwise.
        let participant_count = match self.settings.policy {
            MatchPolicy::AllParticipants => {
                let all = self
                    .vote_store
                    .votes_for_room(room_id, ReadConsistency::Strong)
                    .await?;
                distinct_participants(&all)
            }
            MatchPolicy::ExactQuorum => 0,
        };

        debug!(
            room = %room_id,
            candidate = %candidate_id,
            positives = tally.positive_count(),
            quorum = quorum_size,
            policy = %self.settings.policy,
            "Recheck tally"
        );

        if !self
            .settings
            .policy
            .is_satisfied(tally.positive_count(), quorum_size, participant_count)
        {
            return Ok(None);
        }

        let snapshot = room
            .candidate(candidate_id)
            .cloned()
            .ok_or_else(|| DetectMatchError::CandidateGone {
                room: room_id.clone(),
                candidate: candidate_id,
            })?;
        let record = Match::new(room_id.clone(), snapshot, tally.into_participants());

        match self.match_store.create_if_absent(&record).await? {
            CreateOutcome::Created => {
                info!(
                    room = %room_id,
                    candidate = %candidate_id,
                    participants = record.participants.len(),
                    "Match created"
                );
                let report = self.broadcaster.broadcast(&record, &room).await;
                Ok(Some(MatchOutcome {
                    record,
                    broadcast: Some(report),
                }))
            }
            CreateOutcome::AlreadyExists(existing) => {
                debug!(
                    room = %room_id,
                    candidate = %candidate_id,
                    "Lost conditional create, returning existing match"
                );
                Ok(Some(MatchOutcome {
                    record: existing,
                    broadcast: None,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{GatewayError, RealtimeGateway};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use swipematch_domain::{Candidate, MatchEvent, ParticipantId, Room, Vote};

    struct StubRoomStore {
        room: Room,
    }

    #[async_trait]
    impl RoomStore for StubRoomStore {
        async fn fetch_room(&self, room_id: &RoomId) -> Result<Option<Room>, StoreError> {
            Ok((self.room.id == *room_id).then(|| self.room.clone()))
        }
    }

    struct StubVoteStore {
        votes: Vec<Vote>,
        last_consistency: Mutex<Option<ReadConsistency>>,
    }

    impl StubVoteStore {
        fn new(votes: Vec<Vote>) -> Self {
            Self {
                votes,
                last_consistency: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl VoteStore for StubVoteStore {
        async fn upsert_vote(&self, _vote: &Vote) -> Result<(), StoreError> {
            Ok(())
        }

        async fn votes_for_candidate(
            &self,
            room_id: &RoomId,
            candidate_id: CandidateId,
            consistency: ReadConsistency,
        ) -> Result<Vec<Vote>, StoreError> {
            *self.last_consistency.lock().unwrap() = Some(consistency);
            Ok(self
                .votes
                .iter()
                .filter(|v| v.room_id == *room_id && v.candidate_id == candidate_id)
                .cloned()
                .collect())
        }

        async fn votes_for_room(
            &self,
            room_id: &RoomId,
            _consistency: ReadConsistency,
        ) -> Result<Vec<Vote>, StoreError> {
            Ok(self
                .votes
                .iter()
                .filter(|v| v.room_id == *room_id)
                .cloned()
                .collect())
        }

        async fn has_vote_for_participant(
            &self,
            room_id: &RoomId,
            participant_id: &ParticipantId,
        ) -> Result<bool, StoreError> {
            Ok(self
                .votes
                .iter()
                .any(|v| v.room_id == *room_id && v.participant_id == *participant_id))
        }
    }

    /// Either empty, or primed with an existing match so every create loses
    #[derive(Default)]
    struct StubMatchStore {
        existing: Option<Match>,
        created: Mutex<Option<Match>>,
    }

    #[async_trait]
    impl MatchStore for StubMatchStore {
        async fn create_if_absent(&self, record: &Match) -> Result<CreateOutcome, StoreError> {
            if let Some(existing) = &self.existing {
                return Ok(CreateOutcome::AlreadyExists(existing.clone()));
            }
            let mut created = self.created.lock().unwrap();
            match &*created {
                Some(winner) => Ok(CreateOutcome::AlreadyExists(winner.clone())),
                None => {
                    *created = Some(record.clone());
                    Ok(CreateOutcome::Created)
                }
            }
        }

        async fn fetch_match(
            &self,
            _room_id: &RoomId,
            _candidate_id: CandidateId,
        ) -> Result<Option<Match>, StoreError> {
            Ok(self
                .existing
                .clone()
                .or_else(|| self.created.lock().unwrap().clone()))
        }
    }

    #[derive(Default)]
    struct CountingGateway {
        dispatches: AtomicUsize,
    }

    #[async_trait]
    impl RealtimeGateway for CountingGateway {
        async fn notify_participant(
            &self,
            _participant_id: &ParticipantId,
            _event: &MatchEvent,
        ) -> Result<(), GatewayError> {
            self.dispatches.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn notify_room(
            &self,
            _room_id: &RoomId,
            _event: &MatchEvent,
        ) -> Result<(), GatewayError> {
            self.dispatches.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn room() -> Room {
        Room::new(
            "room-1",
            "alice",
            vec![Candidate::new(42, "The Thing"), Candidate::new(7, "Alien")],
            2,
            60_000,
        )
        .unwrap()
    }

    fn build_detector(
        votes: Vec<Vote>,
        match_store: StubMatchStore,
        settings: MatchingSettings,
    ) -> (MatchDetector, Arc<StubVoteStore>, Arc<CountingGateway>) {
        let vote_store = Arc::new(StubVoteStore::new(votes));
        let gateway = Arc::new(CountingGateway::default());
        let detector = MatchDetector::new(
            Arc::new(StubRoomStore { room: room() }),
            vote_store.clone(),
            Arc::new(match_store),
            BroadcastMatchUseCase::new(gateway.clone()),
            settings,
        );
        (detector, vote_store, gateway)
    }

    #[tokio::test]
    async fn test_no_premature_match() {
        let votes = vec![Vote::yes("room-1", "alice", 42)];
        let (detector, vote_store, gateway) =
            build_detector(votes, StubMatchStore::default(), MatchingSettings::default());

        let outcome = detector.recheck(&"room-1".into(), 42.into()).await.unwrap();

        assert!(outcome.is_none());
        assert_eq!(gateway.dispatches.load(Ordering::SeqCst), 0);
        // The recount must be a strong read
        assert_eq!(
            *vote_store.last_consistency.lock().unwrap(),
            Some(ReadConsistency::Strong)
        );
    }

    #[tokio::test]
    async fn test_quorum_reached_creates_and_broadcasts() {
        let votes = vec![
            Vote::yes("room-1", "alice", 42),
            Vote::yes("room-1", "bob", 42),
        ];
        let (detector, _, gateway) =
            build_detector(votes, StubMatchStore::default(), MatchingSettings::default());

        let outcome = detector
            .recheck(&"room-1".into(), 42.into())
            .await
            .unwrap()
            .expect("quorum of 2 reached");

        assert!(outcome.created_here());
        assert_eq!(outcome.record.participants.len(), 2);
        assert_eq!(outcome.record.candidate.title, "The Thing");
        // Two user-match dispatches plus one room-match
        assert_eq!(gateway.dispatches.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_overshoot_does_not_rematch() {
        // Three positives against quorum 2: the == predicate stays quiet
        let votes = vec![
            Vote::yes("room-1", "alice", 42),
            Vote::yes("room-1", "bob", 42),
            Vote::yes("room-1", "carol", 42),
        ];
        let (detector, _, gateway) =
            build_detector(votes, StubMatchStore::default(), MatchingSettings::default());

        let outcome = detector.recheck(&"room-1".into(), 42.into()).await.unwrap();

        assert!(outcome.is_none());
        assert_eq!(gateway.dispatches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_lost_race_returns_existing_without_broadcast() {
        let existing = Match::new(
            "room-1",
            Candidate::new(42, "The Thing"),
            vec![ParticipantId::new("alice"), ParticipantId::new("bob")],
        );
        let votes = vec![
            Vote::yes("room-1", "alice", 42),
            Vote::yes("room-1", "bob", 42),
        ];
        let match_store = StubMatchStore {
            existing: Some(existing.clone()),
            ..Default::default()
        };
        let (detector, _, gateway) = build_detector(votes, match_store, MatchingSettings::default());

        let outcome = detector
            .recheck(&"room-1".into(), 42.into())
            .await
            .unwrap()
            .expect("match exists");

        assert!(!outcome.created_here());
        assert_eq!(outcome.record, existing);
        assert_eq!(gateway.dispatches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_participants_policy() {
        let settings = MatchingSettings::new(2, swipematch_domain::MatchPolicy::AllParticipants);

        // Three members (carol joined via sentinel), only two yes on 42
        let votes = vec![
            Vote::yes("room-1", "alice", 42),
            Vote::yes("room-1", "bob", 42),
            Vote::participation("room-1", "carol"),
        ];
        let (detector, _, _) = build_detector(votes, StubMatchStore::default(), settings);
        let outcome = detector.recheck(&"room-1".into(), 42.into()).await.unwrap();
        assert!(outcome.is_none());

        // Carol votes yes as well: all three members agree
        let votes = vec![
            Vote::yes("room-1", "alice", 42),
            Vote::yes("room-1", "bob", 42),
            Vote::participation("room-1", "carol"),
            Vote::yes("room-1", "carol", 42),
        ];
        let (detector, _, _) = build_detector(votes, StubMatchStore::default(), settings);
        let outcome = detector
            .recheck(&"room-1".into(), 42.into())
            .await
            .unwrap()
            .expect("all participants agreed");
        assert_eq!(outcome.record.participants.len(), 3);
    }

    #[tokio::test]
    async fn test_room_gone_is_an_error() {
        let (detector, _, _) = build_detector(
            vec![],
            StubMatchStore::default(),
            MatchingSettings::default(),
        );

        let err = detector
            .recheck(&"no-such-room".into(), 42.into())
            .await
            .unwrap_err();
        assert!(matches!(err, DetectMatchError::RoomGone(_)));
    }

    #[tokio::test]
    async fn test_quorum_fallback_for_legacy_rooms() {
        let mut legacy = room();
        legacy.quorum_size = None;
        let votes = vec![
            Vote::yes("room-1", "alice", 42),
            Vote::yes("room-1", "bob", 42),
        ];
        let vote_store = Arc::new(StubVoteStore::new(votes));
        let gateway = Arc::new(CountingGateway::default());
        let detector = MatchDetector::new(
            Arc::new(StubRoomStore { room: legacy }),
            vote_store,
            Arc::new(StubMatchStore::default()),
            BroadcastMatchUseCase::new(gateway),
            MatchingSettings::default(),
        );

        // Default quorum of 2 applies
        let outcome = detector.recheck(&"room-1".into(), 42.into()).await.unwrap();
        assert!(outcome.is_some());
    }
}
