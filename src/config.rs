// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge configuration.
//!
//! A configuration names the topic scope to listen to, the light to control,
//! and the [`PolicyMode`] that turns input transitions into commands. It can
//! be built in code or loaded from a JSON document:
//!
//! ```json
//! { "scope": "shellies/dev1/input/0", "actuator_ref": "light.hallway", "mode": "toggle" }
//! ```
//!
//! The keys `topic`, `light`, `actuatorRef` and the boolean `toggle` are also
//! accepted. When both `mode` and `toggle` are present, `mode` wins.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{ActuatorRef, Scope};

/// How input transitions are turned into light commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyMode {
    /// Flip the light's live status on every transition.
    Toggle,
    /// Follow the input: zero turns the light off, anything else on.
    #[default]
    Direct,
}

impl PolicyMode {
    /// Returns the configuration name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Direct => "direct",
        }
    }
}

impl fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PolicyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toggle" => Ok(Self::Toggle),
            "direct" => Ok(Self::Direct),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// Validated configuration of one bridge instance.
///
/// # Examples
///
/// ```
/// use shelly_bridge::{BridgeConfig, PolicyMode};
///
/// let config = BridgeConfig::new("shellies/dev1/input/0", "light.hallway")
///     .with_mode(PolicyMode::Toggle);
/// assert_eq!(config.mode(), PolicyMode::Toggle);
///
/// let loaded = BridgeConfig::from_json(
///     r#"{"topic": "shellies/dev1/input/0", "light": "light.hallway"}"#,
/// )
/// .unwrap();
/// assert_eq!(loaded.mode(), PolicyMode::Direct);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    scope: Scope,
    actuator: ActuatorRef,
    mode: PolicyMode,
}

impl BridgeConfig {
    /// Creates a configuration in [`PolicyMode::Direct`].
    #[must_use]
    pub fn new(scope: impl Into<String>, actuator: impl Into<String>) -> Self {
        Self {
            scope: Scope::new(scope),
            actuator: ActuatorRef::new(actuator),
            mode: PolicyMode::default(),
        }
    }

    /// Sets the policy mode.
    #[must_use]
    pub fn with_mode(mut self, mode: PolicyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Loads a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed,
    /// [`ConfigError::MissingField`] if `scope` or `actuator_ref` is absent,
    /// and [`ConfigError::InvalidMode`] for an unknown `mode`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<ConfigFile>(json)?.validate()
    }

    /// Loads a configuration from an already parsed JSON value, such as the
    /// argument map of a host application.
    ///
    /// # Errors
    ///
    /// Same as [`BridgeConfig::from_json`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        serde_json::from_value::<ConfigFile>(value)?.validate()
    }

    /// Returns the topic scope.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Returns the controlled light.
    #[must_use]
    pub fn actuator(&self) -> &ActuatorRef {
        &self.actuator
    }

    /// Returns the policy mode.
    #[must_use]
    pub fn mode(&self) -> PolicyMode {
        self.mode
    }
}

/// Unvalidated configuration document.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(alias = "topic")]
    scope: Option<String>,
    #[serde(alias = "actuatorRef", alias = "light")]
    actuator_ref: Option<String>,
    mode: Option<String>,
    toggle: Option<bool>,
}

impl ConfigFile {
    fn validate(self) -> Result<BridgeConfig, ConfigError> {
        let scope = self.scope.ok_or(ConfigError::MissingField("scope"))?;
        let actuator = self
            .actuator_ref
            .ok_or(ConfigError::MissingField("actuator_ref"))?;
        let mode = match (self.mode, self.toggle) {
            (Some(mode), _) => mode.parse()?,
            (None, Some(true)) => PolicyMode::Toggle,
            (None, _) => PolicyMode::Direct,
        };

        let config = BridgeConfig::new(scope, actuator).with_mode(mode);
        tracing::debug!(
            scope = %config.scope,
            actuator = %config.actuator,
            mode = %config.mode,
            "Configuration validated"
        );
        Ok(config)
    }
}
