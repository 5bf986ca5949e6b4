// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Toggle policy.

use crate::actuator::Actuator;
use crate::error::Error;
use crate::types::{ActuatorRef, Payload, PowerState};

use super::ActuationPolicy;

/// Flips the light on every input transition.
///
/// The payload value is ignored. The current state comes from a live status
/// read, since the light may have been switched by other means since the
/// last transition. An unrecognised status is logged and resolved by turning
/// the light on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TogglePolicy;

impl ActuationPolicy for TogglePolicy {
    async fn apply<A: Actuator>(
        &self,
        _payload: &Payload,
        actuator: &A,
        target: &ActuatorRef,
    ) -> Result<PowerState, Error> {
        let status = actuator.status(target).await?;

        let state = if let Some(current) = status.power() {
            let next = current.inverted();
            tracing::info!(
                target_light = %target,
                from = %current,
                to = %next,
                "Toggling light"
            );
            next
        } else {
            tracing::warn!(
                target_light = %target,
                status = %status,
                "Unknown light status, turning on"
            );
            PowerState::On
        };

        actuator.set_power(target, state).await?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::{ActuatorCall, MemoryActuator};
    use crate::error::ActuatorError;

    fn target() -> ActuatorRef {
        ActuatorRef::new("light.hallway")
    }

    async fn toggle(actuator: &MemoryActuator) -> Result<PowerState, Error> {
        TogglePolicy
            .apply(&Payload::from("1"), actuator, &target())
            .await
    }

    #[tokio::test]
    async fn on_turns_off() {
        let actuator = MemoryActuator::with_status("on");
        assert_eq!(toggle(&actuator).await.unwrap(), PowerState::Off);
        assert_eq!(
            actuator.calls(),
            vec![
                ActuatorCall::Status(target()),
                ActuatorCall::TurnOff(target())
            ]
        );
    }

    #[tokio::test]
    async fn off_turns_on() {
        let actuator = MemoryActuator::with_status("off");
        assert_eq!(toggle(&actuator).await.unwrap(), PowerState::On);
        assert_eq!(actuator.commands(), vec![PowerState::On]);
    }

    #[tokio::test]
    async fn unknown_status_turns_on() {
        for status in ["unavailable", "unknown", "ON", ""] {
            let actuator = MemoryActuator::with_status(status);
            assert_eq!(toggle(&actuator).await.unwrap(), PowerState::On);
            assert_eq!(actuator.commands(), vec![PowerState::On], "{status:?}");
        }
    }

    #[tokio::test]
    async fn payload_value_is_ignored() {
        let actuator = MemoryActuator::with_status("on");
        TogglePolicy
            .apply(&Payload::from("not a number"), &actuator, &target())
            .await
            .unwrap();
        assert_eq!(actuator.commands(), vec![PowerState::Off]);
    }

    #[tokio::test]
    async fn follows_externally_changed_status() {
        let actuator = MemoryActuator::with_status("off");
        toggle(&actuator).await.unwrap();
        actuator.set_status("off");
        toggle(&actuator).await.unwrap();
        assert_eq!(actuator.commands(), vec![PowerState::On, PowerState::On]);
    }

    #[tokio::test]
    async fn status_failure_skips_command() {
        let actuator = MemoryActuator::new();
        actuator.fail_status(Some("unreachable"));
        let err = toggle(&actuator).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Actuator(ActuatorError::StatusUnavailable { .. })
        ));
        assert!(actuator.commands().is_empty());
    }
}
