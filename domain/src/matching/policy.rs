//! Match policies
//!
//! The predicate deciding when a candidate's positive votes become a match.

use serde::{Deserialize, Serialize};

/// Rule for declaring a match on a candidate
///
/// - `ExactQuorum`: the positive count equals the room's quorum size
///   exactly. The comparison is `==`, not `>=`, so the set of participants
///   that caused the match is deterministic even when more people vote yes
///   afterwards.
/// - `AllParticipants`: every distinct participant currently in the room
///   has voted yes. Membership is counted from vote records, sentinel
///   participation votes included, so the threshold moves as people join.
///
/// # Example
///
/// ```
/// use swipematch_domain::matching::MatchPolicy;
///
/// let exact = MatchPolicy::ExactQuorum;
/// assert!(exact.is_satisfied(2, 2, 5));
/// assert!(!exact.is_satisfied(3, 2, 5));
///
/// let all = MatchPolicy::AllParticipants;
/// assert!(all.is_satisfied(5, 2, 5));
/// assert!(!all.is_satisfied(4, 2, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Positive count equals the room's quorum size
    #[default]
    ExactQuorum,

    /// Positive count equals the distinct participant count of the room
    AllParticipants,
}

impl MatchPolicy {
    /// Check whether the match condition holds
    ///
    /// `positives` and `participants` are distinct-participant counts; the
    /// tally has already deduplicated repeat votes.
    pub fn is_satisfied(&self, positives: u32, quorum_size: u32, participants: u32) -> bool {
        match self {
            MatchPolicy::ExactQuorum => positives == quorum_size,
            MatchPolicy::AllParticipants => participants > 0 && positives == participants,
        }
    }

    /// Human-readable description of this policy
    pub fn description(&self) -> &'static str {
        match self {
            MatchPolicy::ExactQuorum => "exact quorum size",
            MatchPolicy::AllParticipants => "all participants in room",
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::ExactQuorum => write!(f, "exact-quorum"),
            MatchPolicy::AllParticipants => write!(f, "all-participants"),
        }
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = crate::core::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "exact-quorum" | "exact" => Ok(MatchPolicy::ExactQuorum),
            "all-participants" | "all" => Ok(MatchPolicy::AllParticipants),
            other => Err(crate::core::error::DomainError::InvalidPolicy(
                other.to_string(),
            )),
        }
    }
}
