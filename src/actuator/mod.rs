// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The actuator seam.
//!
//! The bridge does not drive lights itself. Callers implement [`Actuator`]
//! on top of whatever controls the light (a home automation REST API, an
//! MQTT command topic, a relay) and hand it to the
//! [`Bridge`](crate::Bridge).
//!
//! [`MemoryActuator`] is an in-memory implementation that records every call,
//! for tests and dry runs.

mod memory;

pub use memory::{ActuatorCall, MemoryActuator};

use std::sync::Arc;

use crate::error::ActuatorError;
use crate::types::{ActuatorRef, ActuatorStatus, PowerState};

/// Trait for lights the bridge can query and command.
#[allow(async_fn_in_trait)]
pub trait Actuator {
    /// Reads the light's live status.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::StatusUnavailable`] if the status cannot be read.
    async fn status(&self, target: &ActuatorRef) -> Result<ActuatorStatus, ActuatorError>;

    /// Turns the light on.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::CommandFailed`] if the command fails.
    async fn turn_on(&self, target: &ActuatorRef) -> Result<(), ActuatorError>;

    /// Turns the light off.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::CommandFailed`] if the command fails.
    async fn turn_off(&self, target: &ActuatorRef) -> Result<(), ActuatorError>;

    /// Commands the light into `state`.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying command.
    async fn set_power(
        &self,
        target: &ActuatorRef,
        state: PowerState,
    ) -> Result<(), ActuatorError> {
        match state {
            PowerState::On => self.turn_on(target).await,
            PowerState::Off => self.turn_off(target).await,
        }
    }
}

impl<T: Actuator + ?Sized> Actuator for &T {
    async fn status(&self, target: &ActuatorRef) -> Result<ActuatorStatus, ActuatorError> {
        (**self).status(target).await
    }

    async fn turn_on(&self, target: &ActuatorRef) -> Result<(), ActuatorError> {
        (**self).turn_on(target).await
    }

    async fn turn_off(&self, target: &ActuatorRef) -> Result<(), ActuatorError> {
        (**self).turn_off(target).await
    }
}

impl<T: Actuator + ?Sized> Actuator for Arc<T> {
    async fn status(&self, target: &ActuatorRef) -> Result<ActuatorStatus, ActuatorError> {
        (**self).status(target).await
    }

    async fn turn_on(&self, target: &ActuatorRef) -> Result<(), ActuatorError> {
        (**self).turn_on(target).await
    }

    async fn turn_off(&self, target: &ActuatorRef) -> Result<(), ActuatorError> {
        (**self).turn_off(target).await
    }
}
