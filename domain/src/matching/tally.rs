//! Vote tallying
//!
//! Pure aggregation over raw vote records. The detector feeds this the
//! strong-read result for one candidate; everything here is deterministic
//! and storage-free.

use crate::core::id::{CandidateId, ParticipantId};
use crate::vote::Vote;
use std::collections::HashMap;

/// Aggregated positive-vote state for one candidate
///
/// Deduplicates by participant (latest cast wins), excludes the sentinel
/// participation record, and keeps the positive participant set sorted so
/// the resulting match is deterministic.
///
/// # Example
///
/// ```
/// use swipematch_domain::matching::VoteTally;
/// use swipematch_domain::vote::Vote;
///
/// let votes = vec![
///     Vote::yes("r", "alice", 42).with_cast_at(1),
///     Vote::yes("r", "bob", 42).with_cast_at(2),
/// ];
/// let tally = VoteTally::from_votes(42.into(), &votes);
/// assert_eq!(tally.positive_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VoteTally {
    candidate_id: CandidateId,
    positive_participants: Vec<ParticipantId>,
}

impl VoteTally {
    /// Build a tally from raw vote records for one candidate
    ///
    /// Records for other candidates and sentinel records are ignored, so a
    /// caller may pass an unfiltered room scan.
    pub fn from_votes(candidate_id: CandidateId, votes: &[Vote]) -> Self {
        // Latest vote per participant wins
        let mut latest: HashMap<&ParticipantId, &Vote> = HashMap::new();
        for vote in votes {
            if vote.candidate_id != candidate_id || vote.is_participation() {
                continue;
            }
            match latest.get(&vote.participant_id) {
                Some(existing) if existing.cast_at >= vote.cast_at => {}
                _ => {
                    latest.insert(&vote.participant_id, vote);
                }
            }
        }

        let mut positive_participants: Vec<ParticipantId> = latest
            .values()
            .filter(|v| v.value)
            .map(|v| v.participant_id.clone())
            .collect();
        positive_participants.sort();

        Self {
            candidate_id,
            positive_participants,
        }
    }

    pub fn candidate_id(&self) -> CandidateId {
        self.candidate_id
    }

    /// Number of distinct participants with a live positive vote
    pub fn positive_count(&self) -> u32 {
        self.positive_participants.len() as u32
    }

    /// Distinct participants with a live positive vote, sorted
    pub fn positive_participants(&self) -> &[ParticipantId] {
        &self.positive_participants
    }

    /// Consume the tally, yielding the positive participant set
    pub fn into_participants(self) -> Vec<ParticipantId> {
        self.positive_participants
    }
}

/// Count distinct participants with any vote record in the room
///
/// Sentinel participation votes count here; this is how membership is
/// measured for the [`MatchPolicy::AllParticipants`](super::MatchPolicy)
/// policy.
pub fn distinct_participants(votes: &[Vote]) -> u32 {
    let mut seen: Vec<&ParticipantId> = votes.iter().map(|v| &v.participant_id).collect();
    seen.sort();
    seen.dedup();
    seen.len() as u32
}
