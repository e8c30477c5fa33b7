//! Submit vote use case
//!
//! Validates and persists a single swipe, then drives match detection when
//! the swipe was positive. Everything before the vote write fails the whole
//! request; once the vote is durable, downstream trouble is reported but
//! never un-persists it.

use crate::access::RoomAccessGuard;
use crate::ports::{RoomStore, StoreError, VoteStore};
use crate::use_cases::detect_match::{MatchDetector, MatchOutcome};
use std::sync::Arc;
use swipematch_domain::{CandidateId, ParticipantId, Room, RoomId, Vote, util};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced to the voter
///
/// All of these occur before any write; the caller may safely resubmit.
#[derive(Error, Debug)]
pub enum SubmitVoteError {
    #[error("Room {0} not found")]
    RoomNotFound(RoomId),

    #[error("Room {0} has expired")]
    RoomExpired(RoomId),

    #[error("Participant {participant} is not allowed in room {room}")]
    Unauthorized {
        room: RoomId,
        participant: ParticipantId,
    },

    #[error("Candidate {candidate} is not in room {room}")]
    CandidateNotInRoom {
        room: RoomId,
        candidate: CandidateId,
    },

    #[error("Store failure: {0}")]
    Storage(#[from] StoreError),
}

/// Input for the SubmitVote use case
#[derive(Debug, Clone)]
pub struct SubmitVoteInput {
    pub participant_id: ParticipantId,
    pub room_id: RoomId,
    pub candidate_id: CandidateId,
    pub value: bool,
}

impl SubmitVoteInput {
    pub fn new(
        participant_id: impl Into<ParticipantId>,
        room_id: impl Into<RoomId>,
        candidate_id: impl Into<CandidateId>,
        value: bool,
    ) -> Self {
        Self {
            participant_id: participant_id.into(),
            room_id: room_id.into(),
            candidate_id: candidate_id.into(),
            value,
        }
    }

    /// Sentinel input marking room participation without a preference
    pub fn participation(
        participant_id: impl Into<ParticipantId>,
        room_id: impl Into<RoomId>,
    ) -> Self {
        Self::new(participant_id, room_id, CandidateId::PARTICIPATION, true)
    }
}

/// What the recorded vote led to
#[derive(Debug)]
pub enum VoteOutcome {
    /// Vote recorded, quorum not satisfied
    NoMatch,
    /// Vote recorded and a match surfaced (created here or read back)
    Matched(MatchOutcome),
    /// Vote recorded but the recheck failed; match state is unknown and the
    /// vote stands regardless
    Unresolved,
}

impl VoteOutcome {
    pub fn as_match(&self) -> Option<&MatchOutcome> {
        match self {
            VoteOutcome::Matched(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Result of a successful submission: the vote is durable either way
#[derive(Debug)]
pub struct SubmitVoteOutput {
    pub vote: Vote,
    pub outcome: VoteOutcome,
}

/// Use case for recording one swipe
pub struct SubmitVoteUseCase {
    room_store: Arc<dyn RoomStore>,
    vote_store: Arc<dyn VoteStore>,
    guard: RoomAccessGuard,
    detector: MatchDetector,
}

impl SubmitVoteUseCase {
    pub fn new(
        room_store: Arc<dyn RoomStore>,
        vote_store: Arc<dyn VoteStore>,
        guard: RoomAccessGuard,
        detector: MatchDetector,
    ) -> Self {
        Self {
            room_store,
            vote_store,
            guard,
            detector,
        }
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        input: SubmitVoteInput,
    ) -> Result<SubmitVoteOutput, SubmitVoteError> {
        let room = self.load_live_room(&input.room_id).await?;

        if !self
            .guard
            .authorize(&input.participant_id, &room)
            .await
            .is_allowed()
        {
            return Err(SubmitVoteError::Unauthorized {
                room: input.room_id,
                participant: input.participant_id,
            });
        }

        // Sentinel participation records are always acceptable; real votes
        // must name a candidate the room actually offers.
        if !input.candidate_id.is_participation() && !room.has_candidate(input.candidate_id) {
            return Err(SubmitVoteError::CandidateNotInRoom {
                room: input.room_id,
                candidate: input.candidate_id,
            });
        }

        let vote = Vote::new(
            input.room_id.clone(),
            input.participant_id.clone(),
            input.candidate_id,
            input.value,
        );
        self.vote_store.upsert_vote(&vote).await?;

        debug!(
            room = %vote.room_id,
            participant = %vote.participant_id,
            candidate = %vote.candidate_id,
            value = vote.value,
            "Vote persisted"
        );

        // Negative swipes and sentinels can never complete a quorum
        if !vote.value || vote.is_participation() {
            return Ok(SubmitVoteOutput {
                vote,
                outcome: VoteOutcome::NoMatch,
            });
        }

        // The vote is durable from here on: recheck trouble degrades the
        // response, it does not fail it.
        let outcome = match self.detector.recheck(&vote.room_id, vote.candidate_id).await {
            Ok(Some(outcome)) => VoteOutcome::Matched(outcome),
            Ok(None) => VoteOutcome::NoMatch,
            Err(e) => {
                warn!(
                    room = %vote.room_id,
                    candidate = %vote.candidate_id,
                    error = %e,
                    "Recheck failed after vote write; vote stands"
                );
                VoteOutcome::Unresolved
            }
        };

        Ok(SubmitVoteOutput { vote, outcome })
    }

    async fn load_live_room(&self, room_id: &RoomId) -> Result<Room, SubmitVoteError> {
        let room = self
            .room_store
            .fetch_room(room_id)
            .await?
            .ok_or_else(|| SubmitVoteError::RoomNotFound(room_id.clone()))?;

        if room.is_expired(util::now_millis()) {
            return Err(SubmitVoteError::RoomExpired(room_id.clone()));
        }

        Ok(room)
    }
}
