// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power-related types for the controlled light.
//!
//! [`PowerState`] is what the bridge commands; [`ActuatorStatus`] is what the
//! actuator reports back, which may be something other than on or off
//! (`unavailable`, `unknown`, ...).

use std::fmt;

/// A commandable power state of the light.
///
/// # Examples
///
/// ```
/// use shelly_bridge::types::PowerState;
///
/// assert_eq!(PowerState::On.as_str(), "on");
/// assert_eq!(PowerState::from(false), PowerState::Off);
/// assert_eq!(PowerState::On.inverted(), PowerState::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// Power is off.
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the lowercase name used by actuators.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

/// The status an actuator reports for itself.
///
/// Parsing is exact: only `"on"` and `"off"` map to known states, everything
/// else is kept verbatim in [`ActuatorStatus::Other`].
///
/// # Examples
///
/// ```
/// use shelly_bridge::types::{ActuatorStatus, PowerState};
///
/// assert_eq!(ActuatorStatus::from("on"), ActuatorStatus::On);
/// assert_eq!(ActuatorStatus::from("unavailable").power(), None);
/// assert_eq!(ActuatorStatus::Off.power(), Some(PowerState::Off));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActuatorStatus {
    /// The light reports on.
    On,
    /// The light reports off.
    Off,
    /// Any other reported status.
    Other(String),
}

impl ActuatorStatus {
    /// Returns the power state, if the status is a known one.
    #[must_use]
    pub const fn power(&self) -> Option<PowerState> {
        match self {
            Self::On => Some(PowerState::On),
            Self::Off => Some(PowerState::Off),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for ActuatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for ActuatorStatus {
    fn from(value: &str) -> Self {
        match value {
            "on" => Self::On,
            "off" => Self::Off,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<PowerState> for ActuatorStatus {
    fn from(state: PowerState) -> Self {
        match state {
            PowerState::On => Self::On,
            PowerState::Off => Self::Off,
        }
    }
}
