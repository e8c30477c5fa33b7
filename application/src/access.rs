//! Room access guard
//!
//! Membership is advisory in this design, not a security boundary: small
//! groups share a room code out of band, and authentication already
//! happened upstream. The guard exists as the single place a stricter
//! policy would drop in.

use crate::ports::{StoreError, VoteStore};
use std::sync::Arc;
use swipematch_domain::{ParticipantId, Room};
use tracing::warn;

/// Authorization decision for a (participant, room) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied,
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allowed)
    }
}

/// Membership predicate applied to non-hosts without a prior vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    /// Anyone authenticated may vote; membership is advisory
    #[default]
    Permissive,
    /// Only the host and prior voters may vote
    MembersOnly,
}

/// Authorizes a participant against a room
///
/// Allows when the participant hosts the room, when any prior vote record
/// (sentinel participation included) exists for them in the room, or — under
/// the default [`AccessPolicy::Permissive`] — always. A storage failure
/// during the check resolves to `Allowed` under either policy: a hiccup
/// must never block legitimate voting.
pub struct RoomAccessGuard {
    vote_store: Arc<dyn VoteStore>,
    policy: AccessPolicy,
}

impl RoomAccessGuard {
    pub fn new(vote_store: Arc<dyn VoteStore>) -> Self {
        Self {
            vote_store,
            policy: AccessPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Read-only policy check; never writes
    pub async fn authorize(&self, participant_id: &ParticipantId, room: &Room) -> Access {
        if *participant_id == room.host_id {
            return Access::Allowed;
        }

        match self
            .vote_store
            .has_vote_for_participant(&room.id, participant_id)
            .await
        {
            Ok(true) => Access::Allowed,
            Ok(false) => match self.policy {
                AccessPolicy::Permissive => Access::Allowed,
                AccessPolicy::MembersOnly => Access::Denied,
            },
            Err(err @ StoreError::Transient(_)) => {
                warn!(
                    room = %room.id,
                    participant = %participant_id,
                    error = %err,
                    "Access check failed, defaulting to allowed"
                );
                Access::Allowed
            }
            Err(err) => {
                warn!(
                    room = %room.id,
                    participant = %participant_id,
                    error = %err,
                    "Access check read a corrupt record, defaulting to allowed"
                );
                Access::Allowed
            }
        }
    }
}
