//! Vote records
//!
//! One live vote per (room, participant, candidate); a later vote for the
//! same triple overwrites the earlier one. There is no history and no undo.

use crate::core::id::{CandidateId, ParticipantId, RoomId};
use serde::{Deserialize, Serialize};

/// Composite key identifying a vote's storage slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoteKey {
    pub room_id: RoomId,
    pub participant_id: ParticipantId,
    pub candidate_id: CandidateId,
}

/// A single yes/no swipe from one participant on one candidate
///
/// # Example
///
/// ```
/// use swipematch_domain::vote::Vote;
///
/// let yes = Vote::yes("room-1", "alice", 42);
/// assert!(yes.value);
///
/// let joined = Vote::participation("room-1", "bob");
/// assert!(joined.is_participation());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub room_id: RoomId,
    pub participant_id: ParticipantId,
    pub candidate_id: CandidateId,
    /// true = swipe right (want to watch), false = swipe left
    pub value: bool,
    /// Millis since epoch; later casts overwrite earlier ones
    pub cast_at: u64,
}

impl Vote {
    pub fn new(
        room_id: impl Into<RoomId>,
        participant_id: impl Into<ParticipantId>,
        candidate_id: impl Into<CandidateId>,
        value: bool,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            participant_id: participant_id.into(),
            candidate_id: candidate_id.into(),
            value,
            cast_at: crate::util::now_millis(),
        }
    }

    /// A positive swipe
    pub fn yes(
        room_id: impl Into<RoomId>,
        participant_id: impl Into<ParticipantId>,
        candidate_id: impl Into<CandidateId>,
    ) -> Self {
        Self::new(room_id, participant_id, candidate_id, true)
    }

    /// A negative swipe
    pub fn no(
        room_id: impl Into<RoomId>,
        participant_id: impl Into<ParticipantId>,
        candidate_id: impl Into<CandidateId>,
    ) -> Self {
        Self::new(room_id, participant_id, candidate_id, false)
    }

    /// Sentinel vote marking that a participant is part of a room
    ///
    /// Carries no preference; it exists so membership can be counted when
    /// the match policy is relative to the participant count.
    pub fn participation(
        room_id: impl Into<RoomId>,
        participant_id: impl Into<ParticipantId>,
    ) -> Self {
        Self::new(room_id, participant_id, CandidateId::PARTICIPATION, true)
    }

    /// Whether this is the sentinel participation record
    pub fn is_participation(&self) -> bool {
        self.candidate_id.is_participation()
    }

    /// The storage slot this vote occupies
    pub fn key(&self) -> VoteKey {
        VoteKey {
            room_id: self.room_id.clone(),
            participant_id: self.participant_id.clone(),
            candidate_id: self.candidate_id,
        }
    }

    /// Pin the timestamp, mainly for tests that need a deterministic order
    pub fn with_cast_at(mut self, cast_at: u64) -> Self {
        self.cast_at = cast_at;
        self
    }
}
