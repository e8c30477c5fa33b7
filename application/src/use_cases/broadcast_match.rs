//! Broadcast match use case
//!
//! Fans a confirmed match out to every matched participant and to the room
//! channel. All dispatches run concurrently and the use case waits for
//! every one of them to settle; individual failures go into the report and
//! are never retried here. The match is already durable by the time this
//! runs, so nothing in this file can fail the vote.

use crate::ports::RealtimeGateway;
use std::sync::Arc;
use swipematch_domain::{Match, MatchEvent, ParticipantId, Room, RoomId};
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Where one dispatch was addressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchTarget {
    Participant(ParticipantId),
    Room(RoomId),
}

impl std::fmt::Display for DispatchTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchTarget::Participant(p) => write!(f, "participant {p}"),
            DispatchTarget::Room(r) => write!(f, "room {r}"),
        }
    }
}

/// Per-dispatch outcome summary for one broadcast
#[derive(Debug, Default)]
pub struct BroadcastReport {
    pub delivered: Vec<DispatchTarget>,
    pub failed: Vec<(DispatchTarget, String)>,
}

impl BroadcastReport {
    /// Total dispatches attempted
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }

    /// Whether every dispatch was delivered
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Use case for broadcasting a confirmed match
pub struct BroadcastMatchUseCase {
    gateway: Arc<dyn RealtimeGateway>,
}

impl BroadcastMatchUseCase {
    pub fn new(gateway: Arc<dyn RealtimeGateway>) -> Self {
        Self { gateway }
    }

    /// Dispatch one user-match notification per matched participant plus
    /// one room-match notification, concurrently, and collect the outcomes
    pub async fn broadcast(&self, record: &Match, room: &Room) -> BroadcastReport {
        let event = record.to_event(room);

        let mut join_set = JoinSet::new();

        for participant in &record.participants {
            let gateway = Arc::clone(&self.gateway);
            let participant = participant.clone();
            let event = event.clone();

            join_set.spawn(async move {
                let result = gateway.notify_participant(&participant, &event).await;
                (DispatchTarget::Participant(participant), result)
            });
        }

        {
            let gateway = Arc::clone(&self.gateway);
            let room_id = room.id.clone();
            let event: MatchEvent = event.clone();

            join_set.spawn(async move {
                let result = gateway.notify_room(&room_id, &event).await;
                (DispatchTarget::Room(room_id), result)
            });
        }

        let mut report = BroadcastReport::default();

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((target, Ok(()))) => {
                    report.delivered.push(target);
                }
                Ok((target, Err(e))) => {
                    warn!(dispatch = %target, error = %e, "Match dispatch failed");
                    report.failed.push((target, e.to_string()));
                }
                Err(e) => {
                    warn!("Dispatch task join error: {}", e);
                }
            }
        }

        info!(
            room = %record.room_id,
            candidate = %record.candidate_id(),
            delivered = report.delivered.len(),
            failed = report.failed.len(),
            "Broadcast settled"
        );

        report
    }
}
