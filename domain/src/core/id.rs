//! Identifier newtypes shared across the domain

use serde::{Deserialize, Serialize};

/// Unique identifier of a room
///
/// Rooms are created by an external flow; this core only ever looks them up
/// by id, so the inner value is treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Authenticated identity of a participant
///
/// Inbound requests arrive with the participant already resolved by the
/// identity layer; no authentication happens in this core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of a candidate within a room
///
/// Candidate ids come from the external catalog and are unique within a
/// room's candidate list. The reserved value [`CandidateId::PARTICIPATION`]
/// marks the sentinel "participant joined" vote and never appears in a
/// candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(i64);

impl CandidateId {
    /// Sentinel id recording room participation without a preference
    pub const PARTICIPATION: CandidateId = CandidateId(-1);

    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Whether this is the sentinel participation id
    pub fn is_participation(&self) -> bool {
        *self == Self::PARTICIPATION
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CandidateId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participation_sentinel() {
        assert!(CandidateId::PARTICIPATION.is_participation());
        assert!(!CandidateId::new(0).is_participation());
        assert!(!CandidateId::new(42).is_participation());
        assert_eq!(CandidateId::PARTICIPATION.value(), -1);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(RoomId::new("room-1").to_string(), "room-1");
        assert_eq!(ParticipantId::new("alice").to_string(), "alice");
        assert_eq!(CandidateId::new(42).to_string(), "42");
    }

    #[test]
    fn test_candidate_id_serde_transparent() {
        let json = serde_json::to_string(&CandidateId::new(7)).unwrap();
        assert_eq!(json, "7");
        let id: CandidateId = serde_json::from_str("-1").unwrap();
        assert!(id.is_participation());
    }
}
