//! Application-level matching configuration

use serde::{Deserialize, Serialize};
use swipematch_domain::MatchPolicy;

/// Settings threaded into the match detector
///
/// Kept as an explicit value rather than a module constant so both policies
/// can be exercised side by side in tests and per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingSettings {
    /// Quorum used when a room predates the `quorum_size` field
    pub default_quorum_size: u32,
    /// Predicate deciding when positives become a match
    pub policy: MatchPolicy,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_quorum_size: 2,
            policy: MatchPolicy::ExactQuorum,
        }
    }
}

impl MatchingSettings {
    pub fn new(default_quorum_size: u32, policy: MatchPolicy) -> Self {
        Self {
            default_quorum_size,
            policy,
        }
    }
}
