// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The bridge: filter and dispatcher composed behind one entry point.

use chrono::{DateTime, Utc};

use crate::actuator::Actuator;
use crate::config::BridgeConfig;
use crate::dispatcher::{Dispatch, DispatchStats, TransitionDispatcher};
use crate::error::Result;
use crate::message::{InboundMessage, MessageFilter, Rejection, Verdict};
use crate::types::{ActuatorStatus, Payload};

/// Outcome of handling one inbound message.
#[derive(Debug)]
pub enum Outcome {
    /// The filter dropped the message.
    Filtered(Rejection),
    /// The message reached the dispatcher.
    Dispatched(Dispatch),
}

impl Outcome {
    /// Returns `true` if an actuator command was issued successfully.
    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self, Self::Dispatched(dispatch) if dispatch.is_action())
    }
}

/// One configured bridge between an input scope and a light.
///
/// # Examples
///
/// ```
/// use shelly_bridge::{Bridge, BridgeConfig};
/// use shelly_bridge::actuator::MemoryActuator;
/// use shelly_bridge::message::InboundMessage;
/// use shelly_bridge::types::PowerState;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let config = BridgeConfig::new("shellies/dev1/input/0", "light.hallway");
/// let mut bridge = Bridge::new(config, MemoryActuator::new());
///
/// bridge.handle(&InboundMessage::new("shellies/dev1/input/0", "1")).await;
/// bridge.handle(&InboundMessage::new("shellies/dev1/input/0", "0")).await;
///
/// assert_eq!(bridge.actuator().commands(), vec![PowerState::Off]);
/// # }
/// ```
#[derive(Debug)]
pub struct Bridge<A> {
    config: BridgeConfig,
    filter: MessageFilter,
    dispatcher: TransitionDispatcher<A>,
}

impl<A: Actuator> Bridge<A> {
    /// Creates a bridge from a validated configuration.
    #[must_use]
    pub fn new(config: BridgeConfig, actuator: A) -> Self {
        tracing::info!(
            scope = %config.scope(),
            actuator = %config.actuator(),
            mode = %config.mode(),
            "Initializing bridge"
        );
        let filter = MessageFilter::new(config.scope().clone());
        let dispatcher =
            TransitionDispatcher::new(config.mode(), actuator, config.actuator().clone());
        Self {
            config,
            filter,
            dispatcher,
        }
    }

    /// Creates a bridge from a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the document is
    /// invalid or lacks a required field.
    pub fn from_json(json: &str, actuator: A) -> Result<Self> {
        Ok(Self::new(BridgeConfig::from_json(json)?, actuator))
    }

    /// Reads and logs the light's status, typically once at startup.
    ///
    /// A failed read is logged as a warning and returns `None`; it does not
    /// prevent the bridge from processing messages.
    pub async fn probe_status(&self) -> Option<ActuatorStatus> {
        let target = self.dispatcher.target();
        match self.dispatcher.actuator().status(target).await {
            Ok(status) => {
                tracing::debug!(target_light = %target, status = %status, "Initial light status");
                Some(status)
            }
            Err(e) => {
                tracing::warn!(
                    target_light = %target,
                    error = %e,
                    "Failed to read initial light status"
                );
                None
            }
        }
    }

    /// Handles one inbound message to completion.
    pub async fn handle(&mut self, message: &InboundMessage) -> Outcome {
        match self.filter.accept(message) {
            Verdict::Accepted(event) => Outcome::Dispatched(self.dispatcher.process(&event).await),
            Verdict::Rejected(rejection) => Outcome::Filtered(rejection),
        }
    }
}

impl<A> Bridge<A> {
    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Returns the actuator.
    #[must_use]
    pub fn actuator(&self) -> &A {
        self.dispatcher.actuator()
    }

    /// Returns the last observed payload.
    #[must_use]
    pub fn last_state(&self) -> Option<&Payload> {
        self.dispatcher.last_state()
    }

    /// Returns when the last genuine transition was processed.
    #[must_use]
    pub fn last_event(&self) -> Option<DateTime<Utc>> {
        self.dispatcher.last_event()
    }

    /// Returns the dispatcher's outcome counters.
    #[must_use]
    pub fn stats(&self) -> DispatchStats {
        self.dispatcher.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PolicyMode;
    use crate::actuator::MemoryActuator;
    use crate::error::Error;
    use crate::types::PowerState;

    const TOPIC: &str = "shellies/dev1/input/0";

    fn bridge(mode: PolicyMode) -> Bridge<MemoryActuator> {
        let config = BridgeConfig::new(TOPIC, "light.hallway").with_mode(mode);
        Bridge::new(config, MemoryActuator::new())
    }

    #[tokio::test]
    async fn filtered_message_does_not_reach_dispatcher() {
        let mut bridge = bridge(PolicyMode::Direct);
        let outcome = bridge
            .handle(&InboundMessage::new("shellies/other/input/0", "1"))
            .await;
        assert!(matches!(outcome, Outcome::Filtered(Rejection::OutOfScope)));
        assert!(bridge.last_state().is_none());
        assert_eq!(bridge.stats().processed(), 0);
    }

    #[tokio::test]
    async fn malformed_message_leaves_state_untouched() {
        let mut bridge = bridge(PolicyMode::Direct);
        bridge.handle(&InboundMessage::new(TOPIC, "1")).await;
        let message = InboundMessage::without_payload(TOPIC);
        let outcome = bridge.handle(&message).await;
        assert!(matches!(outcome, Outcome::Filtered(ref r) if r.is_malformed()));
        assert_eq!(bridge.last_state(), Some(&Payload::from("1")));
    }

    #[tokio::test]
    async fn outcome_reports_action() {
        let mut bridge = bridge(PolicyMode::Direct);
        let baseline = bridge.handle(&InboundMessage::new(TOPIC, "1")).await;
        assert!(!baseline.is_action());
        let change = bridge.handle(&InboundMessage::new(TOPIC, "0")).await;
        assert!(change.is_action());
        let status = bridge.handle(&InboundMessage::status()).await;
        assert!(!status.is_action());
    }

    #[tokio::test]
    async fn probe_status_reads_actuator() {
        let bridge = bridge(PolicyMode::Toggle);
        assert_eq!(bridge.probe_status().await, Some(ActuatorStatus::Off));
    }

    #[tokio::test]
    async fn probe_status_failure_is_not_fatal() {
        let mut bridge = bridge(PolicyMode::Toggle);
        bridge.actuator().fail_status(Some("unreachable"));
        assert_eq!(bridge.probe_status().await, None);

        bridge.actuator().fail_status(None);
        bridge.handle(&InboundMessage::new(TOPIC, "1")).await;
        bridge.handle(&InboundMessage::new(TOPIC, "0")).await;
        assert_eq!(bridge.actuator().commands(), vec![PowerState::On]);
    }

    #[test]
    fn from_json_rejects_missing_actuator() {
        let json = r#"{"scope": "shellies/dev1"}"#;
        let err = Bridge::from_json(json, MemoryActuator::new()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn from_json_builds_configured_bridge() {
        let bridge = Bridge::from_json(
            r#"{"topic": "shellies/dev1/input/0", "light": "light.hallway", "toggle": true}"#,
            MemoryActuator::new(),
        )
        .unwrap();
        assert_eq!(bridge.config().mode(), PolicyMode::Toggle);
    }
}
