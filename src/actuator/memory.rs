// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory actuator.

use parking_lot::Mutex;

use crate::error::ActuatorError;
use crate::types::{ActuatorRef, ActuatorStatus, PowerState};

use super::Actuator;

/// A call received by a [`MemoryActuator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActuatorCall {
    /// `status` was called.
    Status(ActuatorRef),
    /// `turn_on` was called.
    TurnOn(ActuatorRef),
    /// `turn_off` was called.
    TurnOff(ActuatorRef),
}

impl ActuatorCall {
    /// Returns the commanded state, or `None` for status reads.
    #[must_use]
    pub fn command(&self) -> Option<PowerState> {
        match self {
            Self::Status(_) => None,
            Self::TurnOn(_) => Some(PowerState::On),
            Self::TurnOff(_) => Some(PowerState::Off),
        }
    }
}

/// An actuator that lives in memory and records every call.
///
/// Successful commands update the reported status, like a real light would.
/// Failures can be injected separately for status reads and commands; a
/// failed call is still recorded.
///
/// # Examples
///
/// ```
/// use shelly_bridge::actuator::{Actuator, MemoryActuator};
/// use shelly_bridge::types::{ActuatorRef, ActuatorStatus, PowerState};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let light = ActuatorRef::new("light.hallway");
/// let actuator = MemoryActuator::with_status("off");
///
/// actuator.turn_on(&light).await.unwrap();
/// assert_eq!(actuator.status(&light).await.unwrap(), ActuatorStatus::On);
/// assert_eq!(actuator.commands(), vec![PowerState::On]);
/// # }
/// ```
#[derive(Debug)]
pub struct MemoryActuator {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    status: ActuatorStatus,
    calls: Vec<ActuatorCall>,
    status_failure: Option<String>,
    command_failure: Option<String>,
}

impl MemoryActuator {
    /// Creates an actuator reporting `off`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_status(ActuatorStatus::Off)
    }

    /// Creates an actuator reporting the given status.
    #[must_use]
    pub fn with_status(status: impl Into<ActuatorStatus>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                status: status.into(),
                calls: Vec::new(),
                status_failure: None,
                command_failure: None,
            }),
        }
    }

    /// Replaces the reported status, as if changed through another path.
    pub fn set_status(&self, status: impl Into<ActuatorStatus>) {
        self.inner.lock().status = status.into();
    }

    /// Makes status reads fail with `message`, or succeed again with `None`.
    pub fn fail_status(&self, message: Option<&str>) {
        self.inner.lock().status_failure = message.map(str::to_string);
    }

    /// Makes commands fail with `message`, or succeed again with `None`.
    pub fn fail_commands(&self, message: Option<&str>) {
        self.inner.lock().command_failure = message.map(str::to_string);
    }

    /// Returns the currently reported status.
    #[must_use]
    pub fn current_status(&self) -> ActuatorStatus {
        self.inner.lock().status.clone()
    }

    /// Returns every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ActuatorCall> {
        self.inner.lock().calls.clone()
    }

    /// Returns the on/off commands received so far, in order.
    #[must_use]
    pub fn commands(&self) -> Vec<PowerState> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(ActuatorCall::command)
            .collect()
    }

    /// Forgets all recorded calls.
    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    fn command(&self, target: &ActuatorRef, state: PowerState) -> Result<(), ActuatorError> {
        let mut inner = self.inner.lock();
        inner.calls.push(match state {
            PowerState::On => ActuatorCall::TurnOn(target.clone()),
            PowerState::Off => ActuatorCall::TurnOff(target.clone()),
        });
        if let Some(message) = &inner.command_failure {
            return Err(ActuatorError::CommandFailed {
                target: target.to_string(),
                command: state.to_string(),
                message: message.clone(),
            });
        }
        inner.status = state.into();
        Ok(())
    }
}

impl Default for MemoryActuator {
    fn default() -> Self {
        Self::new()
    }
}

impl Actuator for MemoryActuator {
    async fn status(&self, target: &ActuatorRef) -> Result<ActuatorStatus, ActuatorError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ActuatorCall::Status(target.clone()));
        match &inner.status_failure {
            Some(message) => Err(ActuatorError::StatusUnavailable {
                target: target.to_string(),
                message: message.clone(),
            }),
            None => Ok(inner.status.clone()),
        }
    }

    async fn turn_on(&self, target: &ActuatorRef) -> Result<(), ActuatorError> {
        self.command(target, PowerState::On)
    }

    async fn turn_off(&self, target: &ActuatorRef) -> Result<(), ActuatorError> {
        self.command(target, PowerState::Off)
    }
}
