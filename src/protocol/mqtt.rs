// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feeding a `rumqttc` connection into a bridge.
//!
//! The caller owns the MQTT client and its event loop; this module only
//! subscribes to the scope and translates events into [`InboundMessage`]s.
//!
//! ```text
//! Publish  shellies/dev1/input/0 → "1"   → InboundMessage { topic, payload }
//! ConnAck / Disconnect                   → InboundMessage { no topic }
//! anything else                          → ignored
//! ```

use rumqttc::{AsyncClient, Event, EventLoop, Packet, Publish, QoS};

use crate::actuator::Actuator;
use crate::bridge::Bridge;
use crate::error::ProtocolError;
use crate::message::InboundMessage;
use crate::types::{Payload, Scope};

impl From<&Publish> for InboundMessage {
    /// Non UTF-8 payloads become an absent payload, which the filter
    /// reports as malformed.
    fn from(publish: &Publish) -> Self {
        let payload = std::str::from_utf8(&publish.payload)
            .ok()
            .map(Payload::from);
        Self {
            topic: Some(publish.topic.clone()),
            payload,
        }
    }
}

/// Converts an event loop event into an inbound message, if it is one.
#[must_use]
pub fn inbound_from_event(event: &Event) -> Option<InboundMessage> {
    match event {
        Event::Incoming(Packet::Publish(publish)) => Some(publish.into()),
        Event::Incoming(Packet::ConnAck(_) | Packet::Disconnect) => Some(InboundMessage::status()),
        _ => None,
    }
}

/// Subscribes `client` to every topic the scope can match.
///
/// # Errors
///
/// Returns [`ProtocolError::Mqtt`] if the request cannot be queued.
pub async fn subscribe(client: &AsyncClient, scope: &Scope) -> Result<(), ProtocolError> {
    let filter = scope.subscription_filter();
    tracing::debug!(filter = %filter, scope = %scope, "Subscribing to input topics");
    client.subscribe(filter, QoS::AtLeastOnce).await?;
    Ok(())
}

/// Polls `event_loop` and hands every message to `bridge`, one at a time,
/// until the connection ends.
///
/// Returns why the connection ended: [`ProtocolError::Connection`] on a
/// transport error, [`ProtocolError::Disconnected`] when the broker closes
/// the session.
pub async fn run<A: Actuator>(bridge: &mut Bridge<A>, event_loop: &mut EventLoop) -> ProtocolError {
    loop {
        let event = match event_loop.poll().await {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(error = %e, "MQTT event loop error");
                return e.into();
            }
        };

        match &event {
            Event::Incoming(Packet::ConnAck(connack)) => {
                tracing::info!(?connack, "MQTT broker connected");
            }
            Event::Incoming(Packet::Publish(publish)) => {
                tracing::trace!(topic = %publish.topic, "MQTT message received");
            }
            _ => {}
        }

        if let Some(message) = inbound_from_event(&event) {
            bridge.handle(&message).await;
        }

        if matches!(event, Event::Incoming(Packet::Disconnect)) {
            tracing::info!("MQTT broker disconnected");
            return ProtocolError::Disconnected;
        }
    }
}
