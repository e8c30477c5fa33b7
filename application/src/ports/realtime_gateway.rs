//! Real-time pub-sub gateway port

use async_trait::async_trait;
use swipematch_domain::{MatchEvent, ParticipantId, RoomId};
use thiserror::Error;

/// Errors that can occur when dispatching through the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Gateway endpoint unreachable: {0}")]
    Endpoint(String),

    #[error("Delivery rejected: {0}")]
    Delivery(String),

    #[error("Dispatch timed out")]
    Timeout,
}

/// Authenticated fan-out to live subscribers
///
/// Each call addresses either one participant or one room channel and
/// carries the full match payload. Delivery is best-effort from this core's
/// perspective: calls are stateless and idempotent to retry, but the
/// broadcaster does not retry them.
#[async_trait]
pub trait RealtimeGateway: Send + Sync {
    /// Push a "user-match" notification to one participant
    async fn notify_participant(
        &self,
        participant_id: &ParticipantId,
        event: &MatchEvent,
    ) -> Result<(), GatewayError>;

    /// Push a "room-match" notification to the room channel
    async fn notify_room(&self, room_id: &RoomId, event: &MatchEvent) -> Result<(), GatewayError>;
}
