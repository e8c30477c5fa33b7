//! Core domain primitives: identifiers and errors

pub mod error;
pub mod id;

pub use error::DomainError;
pub use id::{CandidateId, ParticipantId, RoomId};
