// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transition detection and dispatch.
//!
//! The [`TransitionDispatcher`] owns the last observed input state and turns
//! accepted events into policy invocations:
//!
//! ```text
//!              first event                    payload == last
//! Uninitialized ──────────→ Tracking ←──────────────────────┐
//!   (Baseline)                 │                 (Unchanged) │
//!                              └─────────────────────────────┘
//!                              │ payload != last
//!                              ↓
//!                 stamp time, apply policy, record payload
//!                     (Actuated or Failed)
//! ```
//!
//! The payload is recorded after the policy runs whether it succeeded or not:
//! the input device is the source of truth for its own state, not the
//! outcome of the command.

mod stats;
mod tracker;

pub use stats::DispatchStats;
pub use tracker::{Observation, Tracker, TrackerState};

use chrono::{DateTime, Utc};

use crate::actuator::Actuator;
use crate::error::Error;
use crate::message::AcceptedEvent;
use crate::policy::{ActuationPolicy, Policy};
use crate::types::{ActuatorRef, Payload, PowerState};

/// Outcome of processing one accepted event.
#[derive(Debug)]
pub enum Dispatch {
    /// The event established the baseline. No action.
    Baseline,
    /// The payload equals the last observed one. No action.
    Unchanged,
    /// The policy commanded the light into this state.
    Actuated(PowerState),
    /// The policy failed; the error has already been logged.
    Failed(Error),
}

impl Dispatch {
    /// Returns `true` if an actuator command was issued successfully.
    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self, Self::Actuated(_))
    }

    /// Returns `true` if the event was a genuine transition, whatever the
    /// policy outcome.
    #[must_use]
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Actuated(_) | Self::Failed(_))
    }
}

/// Detects input transitions and applies the configured policy to them.
///
/// Processing takes `&mut self`, so one event is always fully handled,
/// actuator calls included, before the next one starts.
#[derive(Debug)]
pub struct TransitionDispatcher<A> {
    policy: Policy,
    actuator: A,
    target: ActuatorRef,
    tracker: Tracker,
    stats: DispatchStats,
    last_failed: bool,
}

impl<A: Actuator> TransitionDispatcher<A> {
    /// Creates a dispatcher without baseline.
    #[must_use]
    pub fn new(policy: impl Into<Policy>, actuator: A, target: ActuatorRef) -> Self {
        Self {
            policy: policy.into(),
            actuator,
            target,
            tracker: Tracker::new(),
            stats: DispatchStats::default(),
            last_failed: false,
        }
    }

    /// Processes one accepted event.
    ///
    /// Policy errors are logged and returned inside [`Dispatch::Failed`];
    /// they never leave the dispatcher in an inconsistent state.
    pub async fn process(&mut self, event: &AcceptedEvent) -> Dispatch {
        match self.tracker.observe(&event.payload) {
            Observation::Baseline => {
                tracing::debug!(
                    topic = %event.topic,
                    payload = %event.payload,
                    "Initializing state"
                );
                self.tracker.record(event.payload.clone());
                self.stats.baselines += 1;
                Dispatch::Baseline
            }
            Observation::Unchanged => {
                tracing::debug!(payload = %event.payload, "No state change detected");
                self.stats.duplicates += 1;
                if self.last_failed {
                    self.stats.duplicates_after_failure += 1;
                }
                Dispatch::Unchanged
            }
            Observation::Changed => self.transition(event).await,
        }
    }

    async fn transition(&mut self, event: &AcceptedEvent) -> Dispatch {
        tracing::debug!(
            topic = %event.topic,
            from = ?self.tracker.last().map(ToString::to_string),
            to = %event.payload,
            "State change detected"
        );
        self.tracker.mark_event(Utc::now());
        self.stats.transitions += 1;

        let result = self
            .policy
            .apply(&event.payload, &self.actuator, &self.target)
            .await;
        self.tracker.record(event.payload.clone());

        match result {
            Ok(state) => {
                self.last_failed = false;
                Dispatch::Actuated(state)
            }
            Err(e) => {
                tracing::error!(
                    target_light = %self.target,
                    mode = %self.policy.mode(),
                    error = %e,
                    "Error handling state change"
                );
                self.stats.failures += 1;
                self.last_failed = true;
                Dispatch::Failed(e)
            }
        }
    }
}

impl<A> TransitionDispatcher<A> {
    /// Returns the configured policy.
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the actuator.
    #[must_use]
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Returns the controlled light.
    #[must_use]
    pub fn target(&self) -> &ActuatorRef {
        &self.target
    }

    /// Returns the tracked input state.
    #[must_use]
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Returns the last observed payload.
    #[must_use]
    pub fn last_state(&self) -> Option<&Payload> {
        self.tracker.last()
    }

    /// Returns when the last genuine transition was processed.
    #[must_use]
    pub fn last_event(&self) -> Option<DateTime<Utc>> {
        self.tracker.last_event()
    }

    /// Returns the outcome counters.
    #[must_use]
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }
}
