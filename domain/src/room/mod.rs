//! Room entities and join codes

pub mod code;
pub mod entities;

pub use code::RoomCode;
pub use entities::{Candidate, Room};
