//! Match records and broadcast payloads
//!
//! A match is write-once per (room, candidate): the store's conditional
//! create is the only thing that ever decides who created it, and nothing
//! in this core mutates or deletes one afterwards.

use crate::core::id::{CandidateId, ParticipantId, RoomId};
use crate::room::{Candidate, Room};
use serde::{Deserialize, Serialize};

/// The first (and only) match for a (room, candidate) pair
///
/// Holds a snapshot of the winning candidate so notifications never need a
/// second catalog lookup, plus the participants whose positive votes caused
/// the match, sorted for determinism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub room_id: RoomId,
    /// Snapshot of the winning candidate at match time
    pub candidate: Candidate,
    /// Participants whose positive votes caused the match, sorted
    pub participants: Vec<ParticipantId>,
    /// Millis since epoch
    pub matched_at: u64,
}

impl Match {
    pub fn new(
        room_id: impl Into<RoomId>,
        candidate: Candidate,
        mut participants: Vec<ParticipantId>,
    ) -> Self {
        participants.sort();
        Self {
            room_id: room_id.into(),
            candidate,
            participants,
            matched_at: crate::util::now_millis(),
        }
    }

    pub fn candidate_id(&self) -> CandidateId {
        self.candidate.id
    }

    /// Stable identifier derived from the composite key
    pub fn match_id(&self) -> String {
        format!("{}:{}", self.room_id, self.candidate.id)
    }

    /// Build the broadcast payload for this match
    pub fn to_event(&self, room: &Room) -> MatchEvent {
        MatchEvent {
            match_id: self.match_id(),
            room_id: self.room_id.clone(),
            room_code: room.code.clone(),
            candidate: self.candidate.clone(),
            participants: self.participants.clone(),
            matched_at: self.matched_at,
        }
    }
}

/// Structured payload pushed through the real-time gateway
///
/// The same payload goes to each matched participant ("user-match") and to
/// the room channel ("room-match"); the addressing, not the body, differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub match_id: String,
    pub room_id: RoomId,
    pub room_code: crate::room::RoomCode,
    pub candidate: Candidate,
    pub participants: Vec<ParticipantId>,
    pub matched_at: u64,
}
