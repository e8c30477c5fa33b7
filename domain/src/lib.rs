//! Domain layer for swipematch
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Rooms and votes
//!
//! A **Room** is a bounded voting session: a fixed candidate list, a quorum
//! target, and an expiry instant. Participants swipe yes/no on candidates;
//! each (room, participant, candidate) triple holds exactly one live vote
//! with last-write-wins semantics.
//!
//! ## Matches
//!
//! The instant a quorum of distinct participants has voted yes on the same
//! candidate, a write-once **Match** record is created for that (room,
//! candidate) pair. Which predicate declares the match is a [`MatchPolicy`]
//! decision, threaded into the detector rather than hardcoded.

pub mod core;
pub mod matching;
pub mod room;
pub mod util;
pub mod vote;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    id::{CandidateId, ParticipantId, RoomId},
};
pub use matching::{Match, MatchEvent, MatchPolicy, VoteTally, distinct_participants};
pub use room::{Candidate, Room, RoomCode};
pub use vote::{Vote, VoteKey};
