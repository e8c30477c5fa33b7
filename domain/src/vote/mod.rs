//! Vote records and keys

pub mod ballot;

pub use ballot::{Vote, VoteKey};
