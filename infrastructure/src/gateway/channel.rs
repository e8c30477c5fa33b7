//! In-process gateway adapter
//!
//! Fans dispatches into a tokio channel instead of a network service. Used
//! by tests and by single-process deployments where the subscriber lives in
//! the same runtime.

use async_trait::async_trait;
use swipematch_application::ports::{GatewayError, RealtimeGateway};
use swipematch_application::use_cases::broadcast_match::DispatchTarget;
use swipematch_domain::{MatchEvent, ParticipantId, RoomId};
use tokio::sync::mpsc;

/// One dispatched notification as a subscriber would see it
#[derive(Debug, Clone)]
pub struct DispatchedEvent {
    pub target: DispatchTarget,
    pub event: MatchEvent,
}

/// Gateway that delivers into an in-process channel
pub struct ChannelGateway {
    sender: mpsc::UnboundedSender<DispatchedEvent>,
}

impl ChannelGateway {
    /// Create the gateway and the receiving end subscribers drain
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DispatchedEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn dispatch(&self, target: DispatchTarget, event: &MatchEvent) -> Result<(), GatewayError> {
        self.sender
            .send(DispatchedEvent {
                target,
                event: event.clone(),
            })
            .map_err(|_| GatewayError::Endpoint("subscriber channel closed".into()))
    }
}

#[async_trait]
impl RealtimeGateway for ChannelGateway {
    async fn notify_participant(
        &self,
        participant_id: &ParticipantId,
        event: &MatchEvent,
    ) -> Result<(), GatewayError> {
        self.dispatch(DispatchTarget::Participant(participant_id.clone()), event)
    }

    async fn notify_room(&self, room_id: &RoomId, event: &MatchEvent) -> Result<(), GatewayError> {
        self.dispatch(DispatchTarget::Room(room_id.clone()), event)
    }
}
