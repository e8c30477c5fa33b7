//! HTTP pub-sub gateway adapter
//!
//! Pushes match events to an external real-time gateway over authenticated
//! HTTP. Each dispatch is one stateless POST addressed to a user or room
//! channel; the gateway fans it out to live subscribers. Calls carry their
//! own timeout, and a timeout here never undoes the already-durable match.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use swipematch_application::ports::{GatewayError, RealtimeGateway};
use swipematch_domain::{MatchEvent, ParticipantId, RoomId};
use tracing::debug;

/// Kind tag the gateway uses to route the event to UI surfaces
const USER_MATCH: &str = "user-match";
const ROOM_MATCH: &str = "room-match";

#[derive(Serialize)]
struct PublishBody<'a> {
    kind: &'a str,
    payload: &'a MatchEvent,
}

/// Gateway adapter speaking to the pub-sub service's publish API
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
    auth_token: String,
}

impl HttpGateway {
    /// Build a gateway for the given publish endpoint
    ///
    /// `endpoint` is the base URL without a trailing slash, e.g.
    /// `https://push.example.com/v1`.
    pub fn new(
        endpoint: impl Into<String>,
        auth_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Endpoint(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            auth_token: auth_token.into(),
        })
    }

    async fn publish(
        &self,
        channel: &str,
        kind: &str,
        event: &MatchEvent,
    ) -> Result<(), GatewayError> {
        let url = format!("{}/channels/{}/events", self.endpoint, channel);
        debug!(channel, kind, match_id = %event.match_id, "Publishing match event");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.auth_token)
            .json(&PublishBody { kind, payload: event })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::Endpoint(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GatewayError::Delivery(format!(
                "gateway returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl RealtimeGateway for HttpGateway {
    async fn notify_participant(
        &self,
        participant_id: &ParticipantId,
        event: &MatchEvent,
    ) -> Result<(), GatewayError> {
        self.publish(&format!("user-{participant_id}"), USER_MATCH, event)
            .await
    }

    async fn notify_room(&self, room_id: &RoomId, event: &MatchEvent) -> Result<(), GatewayError> {
        self.publish(&format!("room-{room_id}"), ROOM_MATCH, event)
            .await
    }
}
