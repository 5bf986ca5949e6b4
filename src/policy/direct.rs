// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Direct on/off policy.

use crate::actuator::Actuator;
use crate::error::Error;
use crate::types::{ActuatorRef, Payload, PowerState};

use super::ActuationPolicy;

/// Derives the light state from the new payload alone.
///
/// A payload reading zero turns the light off, any other integer turns it
/// on. Non-integer payloads fail before any actuator call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectPolicy;

impl ActuationPolicy for DirectPolicy {
    async fn apply<A: Actuator>(
        &self,
        payload: &Payload,
        actuator: &A,
        target: &ActuatorRef,
    ) -> Result<PowerState, Error> {
        let state = PowerState::from(payload.level()?);
        tracing::info!(target_light = %target, state = %state, "Direct mode, switching light");
        actuator.set_power(target, state).await?;
        Ok(state)
    }
}
