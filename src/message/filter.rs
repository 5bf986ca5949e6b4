// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scope filtering of inbound messages.
//!
//! ```text
//! InboundMessage { topic, payload }
//!          ↓
//!   no topic?            → Rejected(StatusMessage)
//!   outside the scope?   → Rejected(OutOfScope)
//!   no payload?          → Rejected(Malformed)   (logged as error)
//!          ↓
//!   Accepted(AcceptedEvent)
//! ```

use crate::error::MessageError;
use crate::types::Scope;

use super::{AcceptedEvent, InboundMessage};

/// Result of filtering one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The message belongs to this bridge.
    Accepted(AcceptedEvent),
    /// The message was dropped.
    Rejected(Rejection),
}

impl Verdict {
    /// Returns the accepted event, if any.
    #[must_use]
    pub fn accepted(self) -> Option<AcceptedEvent> {
        match self {
            Self::Accepted(event) => Some(event),
            Self::Rejected(_) => None,
        }
    }
}

/// Why a message was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The message has no topic; connection status traffic.
    StatusMessage,
    /// The topic belongs to another device on the shared channel.
    OutOfScope,
    /// The topic is in scope but the message violates the protocol.
    Malformed(MessageError),
}

impl Rejection {
    /// Returns `true` for rejections worth surfacing to an operator.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

/// Accepts messages whose topic starts with the configured [`Scope`].
#[derive(Debug, Clone)]
pub struct MessageFilter {
    scope: Scope,
}

impl MessageFilter {
    /// Creates a filter for the given scope.
    #[must_use]
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }

    /// Returns the scope this filter accepts.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Classifies a message.
    pub fn accept(&self, message: &InboundMessage) -> Verdict {
        let Some(topic) = message.topic.as_deref() else {
            tracing::debug!("Ignoring message without topic (connection status)");
            return Verdict::Rejected(Rejection::StatusMessage);
        };

        if !self.scope.matches(topic) {
            tracing::trace!(topic = %topic, scope = %self.scope, "Ignoring out of scope topic");
            return Verdict::Rejected(Rejection::OutOfScope);
        }

        let Some(payload) = message.payload.clone() else {
            let error = MessageError::MissingPayload {
                topic: topic.to_string(),
            };
            tracing::error!(topic = %topic, error = %error, "Malformed message");
            return Verdict::Rejected(Rejection::Malformed(error));
        };

        tracing::debug!(topic = %topic, payload = %payload, "Accepted message");
        Verdict::Accepted(AcceptedEvent {
            topic: topic.to_string(),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> MessageFilter {
        MessageFilter::new(Scope::new("shellies/dev1/input/0"))
    }

    #[test]
    fn accepts_in_scope_message() {
        let verdict = filter().accept(&InboundMessage::new("shellies/dev1/input/0", "1"));
        assert_eq!(
            verdict,
            Verdict::Accepted(AcceptedEvent::new("shellies/dev1/input/0", "1"))
        );
    }

    #[test]
    fn accepts_deeper_topic_under_scope() {
        let verdict = filter().accept(&InboundMessage::new("shellies/dev1/input/0/event", "S"));
        assert!(matches!(verdict, Verdict::Accepted(_)));
    }

    #[test]
    fn rejects_status_message() {
        let verdict = filter().accept(&InboundMessage::status());
        assert_eq!(verdict, Verdict::Rejected(Rejection::StatusMessage));
    }

    #[test]
    fn status_message_without_topic_is_rejected_even_with_payload() {
        let message = InboundMessage {
            topic: None,
            payload: Some("connected".into()),
        };
        assert_eq!(
            filter().accept(&message),
            Verdict::Rejected(Rejection::StatusMessage)
        );
    }

    #[test]
    fn rejects_other_device() {
        let verdict = filter().accept(&InboundMessage::new("shellies/other/input/0", "1"));
        assert_eq!(verdict, Verdict::Rejected(Rejection::OutOfScope));
    }

    #[test]
    fn out_of_scope_without_payload_is_not_malformed() {
        let verdict = filter().accept(&InboundMessage::without_payload("shellies/other/input/0"));
        assert_eq!(verdict, Verdict::Rejected(Rejection::OutOfScope));
    }

    #[test]
    fn missing_payload_is_malformed() {
        let verdict = filter().accept(&InboundMessage::without_payload("shellies/dev1/input/0"));
        let Verdict::Rejected(rejection) = verdict else {
            panic!("expected rejection");
        };
        assert!(rejection.is_malformed());
        assert_eq!(
            rejection,
            Rejection::Malformed(MessageError::MissingPayload {
                topic: "shellies/dev1/input/0".to_string()
            })
        );
    }

    #[test]
    fn ordinary_rejections_are_not_malformed() {
        assert!(!Rejection::StatusMessage.is_malformed());
        assert!(!Rejection::OutOfScope.is_malformed());
    }

    #[test]
    fn verdict_accepted_accessor() {
        let event = filter()
            .accept(&InboundMessage::new("shellies/dev1/input/0", "0"))
            .accepted();
        assert_eq!(event.map(|e| e.payload), Some("0".into()));
        let status = filter().accept(&InboundMessage::status());
        assert!(status.accepted().is_none());
    }
}
