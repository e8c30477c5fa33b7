//! Match detection primitives: tallying, policies, and match records

pub mod policy;
pub mod record;
pub mod tally;

pub use policy::MatchPolicy;
pub use record::{Match, MatchEvent};
pub use tally::{VoteTally, distinct_participants};
