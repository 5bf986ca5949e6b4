// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound messages and scope filtering.
//!
//! Messages arrive from a shared channel that carries traffic for many
//! devices as well as connection status notifications. The
//! [`MessageFilter`] narrows that stream down to [`AcceptedEvent`]s for the
//! configured scope.

mod filter;

pub use filter::{MessageFilter, Rejection, Verdict};

use serde::{Deserialize, Serialize};

use crate::types::Payload;

/// A message as delivered by the messaging layer.
///
/// Both fields are optional: connection status notifications carry no topic,
/// and a broken publisher may omit the payload.
///
/// # Examples
///
/// ```
/// use shelly_bridge::message::InboundMessage;
///
/// let message: InboundMessage =
///     serde_json::from_str(r#"{"topic": "shellies/dev1/input/0", "payload": "1"}"#).unwrap();
/// assert_eq!(message.topic.as_deref(), Some("shellies/dev1/input/0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InboundMessage {
    /// The topic the message was published on.
    #[serde(default)]
    pub topic: Option<String>,
    /// The message payload.
    #[serde(default)]
    pub payload: Option<Payload>,
}

impl InboundMessage {
    /// Creates a message with a topic and a payload.
    #[must_use]
    pub fn new(topic: impl Into<String>, payload: impl Into<Payload>) -> Self {
        Self {
            topic: Some(topic.into()),
            payload: Some(payload.into()),
        }
    }

    /// Creates a topic-less message, as used for connection status.
    #[must_use]
    pub fn status() -> Self {
        Self::default()
    }

    /// Creates a message on `topic` without a payload.
    #[must_use]
    pub fn without_payload(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            payload: None,
        }
    }
}

/// A message that passed the filter and belongs to this bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedEvent {
    /// The topic the message was published on.
    pub topic: String,
    /// The reported input value.
    pub payload: Payload,
}

impl AcceptedEvent {
    /// Creates an accepted event.
    #[must_use]
    pub fn new(topic: impl Into<String>, payload: impl Into<Payload>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_missing_fields() {
        let message: InboundMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(message, InboundMessage::status());
    }

    #[test]
    fn deserialize_null_payload() {
        let json = r#"{"topic": "shellies/dev1/input/0", "payload": null}"#;
        let message: InboundMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            message,
            InboundMessage::without_payload("shellies/dev1/input/0")
        );
    }

    #[test]
    fn deserialize_numeric_payload() {
        let json = r#"{"topic": "t", "payload": 0}"#;
        let message: InboundMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.payload, Some(Payload::from(0)));
    }

    #[test]
    fn deserialize_ignores_extra_fields() {
        let json = r#"{"topic": "t", "payload": "1", "wildcard": "shellies/#"}"#;
        let message: InboundMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message, InboundMessage::new("t", "1"));
    }
}
