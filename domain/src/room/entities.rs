//! Room and candidate entities
//!
//! Rooms are created by an external flow and are read-only to this core:
//! the candidate list is immutable after creation and expiry is checked
//! lazily on read, never enforced by eviction.

use super::code::RoomCode;
use crate::core::error::DomainError;
use crate::core::id::{CandidateId, ParticipantId, RoomId};
use serde::{Deserialize, Serialize};

/// One item participants vote on (movie or show)
///
/// Display metadata comes from the external catalog and is carried along
/// unchanged so a match can be broadcast without a catalog round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique within the owning room
    pub id: CandidateId,
    /// Display title
    pub title: String,
    /// Poster image URL, if the catalog provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    /// Short synopsis, if the catalog provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            poster_url: None,
            overview: None,
        }
    }

    pub fn with_poster(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }
}

/// A bounded voting session with a fixed candidate list and a quorum target
///
/// # Example
///
/// ```
/// use swipematch_domain::room::{Candidate, Room};
///
/// let room = Room::new(
///     "room-1",
///     "alice",
///     vec![Candidate::new(42, "The Thing")],
///     2,
///     86_400_000,
/// )
/// .unwrap();
///
/// assert!(room.has_candidate(42.into()));
/// assert!(!room.is_expired(room.created_at + 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Human-shareable join code, unique across live rooms
    pub code: RoomCode,
    pub host_id: ParticipantId,
    /// Ordered, immutable after creation
    pub candidates: Vec<Candidate>,
    /// Distinct positive votes required for a match
    ///
    /// `None` on rooms created before the field existed; readers fall back
    /// to a configured default.
    pub quorum_size: Option<u32>,
    /// Millis since epoch
    pub created_at: u64,
    /// Millis since epoch; the room is logically deleted past this instant
    pub expires_at: u64,
}

impl Room {
    /// Create a room, validating the candidate list and quorum size
    pub fn new(
        id: impl Into<RoomId>,
        host_id: impl Into<ParticipantId>,
        candidates: Vec<Candidate>,
        quorum_size: u32,
        ttl_millis: u64,
    ) -> Result<Self, DomainError> {
        if quorum_size < 2 {
            return Err(DomainError::QuorumTooSmall(quorum_size));
        }
        if candidates.is_empty() {
            return Err(DomainError::NoCandidates);
        }
        let mut seen = std::collections::HashSet::new();
        for candidate in &candidates {
            if candidate.id.is_participation() {
                return Err(DomainError::SentinelCandidate);
            }
            if !seen.insert(candidate.id) {
                return Err(DomainError::DuplicateCandidate(candidate.id.value()));
            }
        }

        let created_at = crate::util::now_millis();
        Ok(Self {
            id: id.into(),
            code: RoomCode::generate(),
            host_id: host_id.into(),
            candidates,
            quorum_size: Some(quorum_size),
            created_at,
            expires_at: created_at + ttl_millis,
        })
    }

    /// Lazy expiry check, evaluated against a caller-supplied clock
    pub fn is_expired(&self, now_millis: u64) -> bool {
        now_millis > self.expires_at
    }

    /// Look up a candidate by id
    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Whether the candidate list contains the given id
    pub fn has_candidate(&self, id: CandidateId) -> bool {
        self.candidate(id).is_some()
    }

    /// Quorum size, falling back to a default for rooms lacking the field
    pub fn quorum_size_or(&self, default: u32) -> u32 {
        self.quorum_size.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Candidate> {
        vec![
            Candidate::new(42, "The Thing")
                .with_poster("https://img.example/42.jpg")
                .with_overview("Paranoia at an Antarctic research station"),
            Candidate::new(7, "Alien"),
        ]
    }

    #[test]
    fn test_room_creation() {
        let room = Room::new("room-1", "alice", candidates(), 2, 1000).unwrap();
        assert_eq!(room.quorum_size, Some(2));
        assert_eq!(room.host_id, ParticipantId::new("alice"));
        assert_eq!(room.expires_at, room.created_at + 1000);
        assert_eq!(room.code.as_str().len(), 6);
    }

    #[test]
    fn test_quorum_too_small() {
        let err = Room::new("room-1", "alice", candidates(), 1, 1000).unwrap_err();
        assert!(matches!(err, DomainError::QuorumTooSmall(1)));
    }

    #[test]
    fn test_empty_candidate_list_rejected() {
        let err = Room::new("room-1", "alice", vec![], 2, 1000).unwrap_err();
        assert!(matches!(err, DomainError::NoCandidates));
    }

    #[test]
    fn test_duplicate_candidate_rejected() {
        let dupes = vec![Candidate::new(42, "A"), Candidate::new(42, "B")];
        let err = Room::new("room-1", "alice", dupes, 2, 1000).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateCandidate(42)));
    }

    #[test]
    fn test_sentinel_in_candidate_list_rejected() {
        let bad = vec![Candidate::new(-1, "Nope")];
        let err = Room::new("room-1", "alice", bad, 2, 1000).unwrap_err();
        assert!(matches!(err, DomainError::SentinelCandidate));
    }

    #[test]
    fn test_expiry_is_lazy_and_exclusive() {
        let room = Room::new("room-1", "alice", candidates(), 2, 1000).unwrap();
        assert!(!room.is_expired(room.expires_at));
        assert!(room.is_expired(room.expires_at + 1));
    }

    #[test]
    fn test_candidate_lookup() {
        let room = Room::new("room-1", "alice", candidates(), 2, 1000).unwrap();
        assert!(room.has_candidate(42.into()));
        assert!(!room.has_candidate(99.into()));
        assert_eq!(room.candidate(7.into()).unwrap().title, "Alien");

        // Catalog metadata rides along unchanged
        let thing = room.candidate(42.into()).unwrap();
        assert_eq!(thing.poster_url.as_deref(), Some("https://img.example/42.jpg"));
        assert_eq!(
            thing.overview.as_deref(),
            Some("Paranoia at an Antarctic research station")
        );
    }

    #[test]
    fn test_quorum_fallback() {
        let mut room = Room::new("room-1", "alice", candidates(), 3, 1000).unwrap();
        assert_eq!(room.quorum_size_or(2), 3);
        room.quorum_size = None;
        assert_eq!(room.quorum_size_or(2), 2);
    }
}
