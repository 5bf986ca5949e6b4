// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last observed input state.

use chrono::{DateTime, Utc};

use crate::types::Payload;

/// How a new payload relates to the tracked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// No baseline yet; the payload becomes the baseline.
    Baseline,
    /// Same as the last observed payload.
    Unchanged,
    /// Different from the last observed payload.
    Changed,
}

/// Tracking state machine: `Uninitialized` until the first payload, then
/// `Tracking` with the last observed payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackerState {
    /// No payload observed yet.
    #[default]
    Uninitialized,
    /// A baseline exists.
    Tracking {
        /// The last observed payload.
        last: Payload,
    },
}

/// Owned record of what the input device last reported.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    state: TrackerState,
    last_event: Option<DateTime<Utc>>,
}

impl Tracker {
    /// Creates a tracker without baseline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `payload` with the tracked state without changing it.
    #[must_use]
    pub fn observe(&self, payload: &Payload) -> Observation {
        match &self.state {
            TrackerState::Uninitialized => Observation::Baseline,
            TrackerState::Tracking { last } if last == payload => Observation::Unchanged,
            TrackerState::Tracking { .. } => Observation::Changed,
        }
    }

    /// Stores `payload` as the last observed state.
    pub fn record(&mut self, payload: Payload) {
        self.state = TrackerState::Tracking { last: payload };
    }

    /// Stamps the time of a genuine transition.
    pub fn mark_event(&mut self, at: DateTime<Utc>) {
        self.last_event = Some(at);
    }

    /// Returns the state machine state.
    #[must_use]
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Returns the last observed payload, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Payload> {
        match &self.state {
            TrackerState::Uninitialized => None,
            TrackerState::Tracking { last } => Some(last),
        }
    }

    /// Returns when the last genuine transition was processed.
    #[must_use]
    pub fn last_event(&self) -> Option<DateTime<Utc>> {
        self.last_event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_payload_is_baseline() {
        let tracker = Tracker::new();
        assert_eq!(tracker.observe(&Payload::from("1")), Observation::Baseline);
        assert_eq!(tracker.state(), &TrackerState::Uninitialized);
        assert!(tracker.last().is_none());
    }

    #[test]
    fn observe_does_not_mutate() {
        let mut tracker = Tracker::new();
        tracker.record(Payload::from("1"));
        let _ = tracker.observe(&Payload::from("0"));
        assert_eq!(tracker.last(), Some(&Payload::from("1")));
    }

    #[test]
    fn equal_payload_is_unchanged() {
        let mut tracker = Tracker::new();
        tracker.record(Payload::from("1"));
        assert_eq!(tracker.observe(&Payload::from("1")), Observation::Unchanged);
        assert_eq!(tracker.observe(&Payload::from("0")), Observation::Changed);
    }

    #[test]
    fn mark_event_records_time() {
        let mut tracker = Tracker::new();
        assert!(tracker.last_event().is_none());
        let now = Utc::now();
        tracker.mark_event(now);
        assert_eq!(tracker.last_event(), Some(now));
    }
}
